//! # Simulator Tests
//!
//! Step-level behavior of `DialSimulator` and the combined two-mode run.

use dialsim_core::common::DialError;
use dialsim_core::{Config, CountMode, DialSimulator, Instruction, Program};
use pretty_assertions::assert_eq;

use crate::common::EXAMPLE;
use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_simulator_starts_at_configured_position() {
    let ctx = TestContext::new().starting_at(3);
    let sim = ctx.simulator(CountMode::EveryClick);
    assert_eq!(sim.position(), 3);
    assert_eq!(sim.count(), 0);
    assert_eq!(sim.stats().start_position, 3);
}

#[test]
fn test_simulator_rejects_invalid_start() {
    let config = Config {
        start_position: 100,
    };
    let err = DialSimulator::new(&config, CountMode::EndOfRotation).unwrap_err();
    assert!(matches!(err, DialError::InvalidStartPosition { position: 100 }));
}

#[test]
fn test_end_of_rotation_ignores_passes() {
    let mut sim = DialSimulator::with_mode(CountMode::EndOfRotation);
    sim.step(&Instruction::left(68));
    assert_eq!(sim.position(), 82);
    assert_eq!(sim.count(), 0);
    sim.step(&Instruction::right(18));
    assert_eq!(sim.position(), 0);
    assert_eq!(sim.count(), 1);
}

#[test]
fn test_every_click_counts_passes() {
    let mut sim = DialSimulator::with_mode(CountMode::EveryClick);
    sim.step(&Instruction::left(68));
    assert_eq!(sim.position(), 82);
    assert_eq!(sim.count(), 1);
    sim.step(&Instruction::right(18));
    assert_eq!(sim.count(), 2);
}

#[test]
fn test_only_mode_counter_advances() {
    let program = ProgramBuilder::new().right(50).left(100).build();
    let mut coarse = DialSimulator::with_mode(CountMode::EndOfRotation);
    let mut clicks = DialSimulator::with_mode(CountMode::EveryClick);
    let _ = coarse.run(program.instructions());
    let _ = clicks.run(program.instructions());

    assert_eq!(coarse.counters().end_of_rotation, 2);
    assert_eq!(coarse.counters().pass_through, 0);
    assert_eq!(clicks.counters().end_of_rotation, 0);
    assert_eq!(clicks.counters().pass_through, 2);
}

#[test]
fn test_run_returns_mode_counter() {
    let ctx = TestContext::new();
    let program = Program::parse(EXAMPLE).unwrap();
    assert_eq!(ctx.count(CountMode::EndOfRotation, &program), 3);
    assert_eq!(ctx.count(CountMode::EveryClick, &program), 6);
}

#[test]
fn test_start_at_zero_changes_counts() {
    let ctx = TestContext::new().starting_at(0);
    let program = ProgramBuilder::new().right(100).left(1).right(1).build();
    assert_eq!(ctx.count(CountMode::EndOfRotation, &program), 2);
    assert_eq!(ctx.count(CountMode::EveryClick, &program), 2);
}

#[test]
fn test_stats_track_run() {
    let ctx = TestContext::new();
    let mut sim = ctx.simulator(CountMode::EveryClick);
    let program = ProgramBuilder::new().left(250).right(30).build();
    let count = sim.run(program.instructions());

    let stats = sim.stats();
    assert_eq!(stats.instructions, 2);
    assert_eq!(stats.left_rotations, 1);
    assert_eq!(stats.right_rotations, 1);
    assert_eq!(stats.clicks, 280);
    assert_eq!(stats.full_revolutions, 2);
    assert_eq!(stats.max_distance, 250);
    assert_eq!(stats.pass_through_hits, count);
    assert_eq!(stats.final_position, sim.position());
}

#[test]
fn test_empty_run_leaves_dial_alone() {
    let ctx = TestContext::new();
    let report = ctx.simulate(&Program::default());
    assert_eq!(report.end_of_rotation, 0);
    assert_eq!(report.pass_through, 0);
    assert_eq!(report.final_position, 50);
}

#[test]
fn test_simulate_example() {
    let ctx = TestContext::new();
    let report = ctx.simulate(&Program::parse(EXAMPLE).unwrap());
    assert_eq!(report.end_of_rotation, 3);
    assert_eq!(report.pass_through, 6);
    assert_eq!(report.final_position, 32);
    assert_eq!(report.stats.instructions, 10);
    assert_eq!(report.stats.end_of_rotation_hits, 3);
    assert_eq!(report.stats.pass_through_hits, 6);
}

#[test]
fn test_mode_names() {
    assert_eq!(CountMode::EndOfRotation.to_string(), "end-of-rotation");
    assert_eq!(CountMode::EveryClick.to_string(), "every-click");
    assert_eq!(CountMode::ALL.len(), 2);
}
