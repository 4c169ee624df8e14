//! # Property Tests
//!
//! Invariants of the dial checked against random programs. Distances are kept
//! small so the click-by-click mode stays fast.

use dialsim_core::isa::decode_program;
use dialsim_core::{CountMode, Dial, DialSimulator, Direction, Instruction};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Left), Just(Direction::Right)]
}

fn instruction(max_distance: u64) -> impl Strategy<Value = Instruction> {
    (direction(), 0..=max_distance).prop_map(|(d, n)| Instruction::new(d, n))
}

fn program(min_distance: u64) -> impl Strategy<Value = Vec<Instruction>> {
    prop::collection::vec(
        (direction(), min_distance..=1_000u64).prop_map(|(d, n)| Instruction::new(d, n)),
        0..40,
    )
}

/// Zeros landed on while turning `distance` clicks from `start`, without walking.
fn closed_form_hits(start: u8, inst: &Instruction) -> u64 {
    let start = u64::from(start);
    match inst.direction {
        Direction::Right => (start + inst.distance) / 100,
        Direction::Left if start == 0 => inst.distance / 100,
        Direction::Left if inst.distance >= start => (inst.distance - start) / 100 + 1,
        Direction::Left => 0,
    }
}

proptest! {
    #[test]
    fn every_click_never_undercounts(instructions in program(1)) {
        let a = DialSimulator::with_mode(CountMode::EndOfRotation).run(&instructions);
        let b = DialSimulator::with_mode(CountMode::EveryClick).run(&instructions);
        prop_assert!(b >= a, "every-click {} < end-of-rotation {}", b, a);
    }

    #[test]
    fn position_stays_on_dial(start in 0u8..100, instructions in prop::collection::vec(instruction(300), 0..30)) {
        let mut dial = Dial::new(start).unwrap();
        for inst in &instructions {
            for _ in 0..inst.distance {
                prop_assert!(dial.click(inst.direction) < 100);
            }
        }
        let mut coarse = Dial::new(start).unwrap();
        for inst in &instructions {
            prop_assert!(coarse.rotate(inst) < 100);
        }
        prop_assert_eq!(coarse, dial);
    }

    #[test]
    fn every_click_matches_closed_form(instructions in program(0)) {
        let mut sim = DialSimulator::with_mode(CountMode::EveryClick);
        let mut expected = 0;
        for inst in &instructions {
            expected += closed_form_hits(sim.position(), inst);
            sim.step(inst);
        }
        prop_assert_eq!(sim.count(), expected);
    }

    #[test]
    fn modes_agree_on_final_position(instructions in program(0)) {
        let mut coarse = DialSimulator::with_mode(CountMode::EndOfRotation);
        let mut clicks = DialSimulator::with_mode(CountMode::EveryClick);
        let _ = coarse.run(&instructions);
        let _ = clicks.run(&instructions);
        prop_assert_eq!(coarse.position(), clicks.position());
    }

    #[test]
    fn counting_is_repeatable(instructions in program(0)) {
        let text: Vec<String> = instructions.iter().map(ToString::to_string).collect();
        let program = decode_program(&text).unwrap();
        prop_assert_eq!(program.instructions(), instructions.as_slice());

        for mode in CountMode::ALL {
            let first = DialSimulator::with_mode(mode).run(program.instructions());
            let second = DialSimulator::with_mode(mode).run(program.instructions());
            prop_assert_eq!(first, second);
        }
    }
}
