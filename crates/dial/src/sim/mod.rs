//! Simulation entry points and input loading.
//!
//! Provides the two counting functions over raw input lines, a combined run
//! that reports both counters at once, and a loader for instruction files.

/// Instruction file loading.
pub mod loader;

/// The dial simulator and its counting modes.
pub mod simulator;

pub use simulator::{CountMode, Counters, DialSimulator};

use crate::common::DialError;
use crate::config::Config;
use crate::isa::{Program, decode_program};
use crate::stats::RunStats;

/// Counts instructions that leave the dial at 0, starting from 50.
///
/// Each rotation is applied in one modular step; positions passed through
/// mid-rotation are not inspected.
///
/// # Errors
///
/// Returns [`DialError::MalformedInstruction`] for the first invalid line.
pub fn count_end_of_rotation_zeroes<I, S>(lines: I) -> Result<u64, DialError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    count_zeroes(lines, CountMode::EndOfRotation)
}

/// Counts clicks that leave the dial at 0, starting from 50.
///
/// Every rotation is applied one click at a time, and the final click of a
/// rotation counts like any other, so the result is never smaller than
/// [`count_end_of_rotation_zeroes`] for the same input.
///
/// # Errors
///
/// Returns [`DialError::MalformedInstruction`] for the first invalid line.
pub fn count_all_zero_crossings<I, S>(lines: I) -> Result<u64, DialError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    count_zeroes(lines, CountMode::EveryClick)
}

fn count_zeroes<I, S>(lines: I, mode: CountMode) -> Result<u64, DialError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let program = decode_program(lines)?;
    Ok(DialSimulator::with_mode(mode).run(program.instructions()))
}

/// Outcome of running a program in both counting modes.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Instructions that finished on 0.
    pub end_of_rotation: u64,
    /// Clicks that landed on 0.
    pub pass_through: u64,
    /// Where the dial points after the last instruction.
    pub final_position: u8,
    /// Instruction mix, hits from both modes, and combined host time.
    pub stats: RunStats,
}

/// Runs `program` once per counting mode from the configured start position.
///
/// # Errors
///
/// Returns [`DialError::InvalidStartPosition`] if `config` does not validate.
pub fn simulate(program: &Program, config: &Config) -> Result<RunReport, DialError> {
    let mut coarse = DialSimulator::new(config, CountMode::EndOfRotation)?;
    let mut clicks = DialSimulator::new(config, CountMode::EveryClick)?;

    let end_of_rotation = coarse.run(program.instructions());
    let pass_through = clicks.run(program.instructions());
    debug_assert_eq!(coarse.position(), clicks.position());

    let final_position = coarse.position();
    let mut stats = coarse.into_stats();
    stats.merge_hits(clicks.stats());

    Ok(RunReport {
        end_of_rotation,
        pass_through,
        final_position,
        stats,
    })
}
