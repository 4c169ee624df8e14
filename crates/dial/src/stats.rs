//! Run statistics collection and reporting.
//!
//! This module tracks what happened during a simulation run. It provides:
//! 1. **Instruction mix:** Executed instructions split by direction, clicks, full revolutions.
//! 2. **Hits:** End-of-rotation and pass-through visits to position 0.
//! 3. **Positions:** Where the run started and finished.
//! 4. **Host time:** Wall-clock time spent simulating.

use std::time::Duration;

use crate::common::DEFAULT_START_POSITION;
use crate::isa::{Direction, Instruction};

/// Sections understood by [`RunStats::render_sections`].
pub const SECTIONS: [&str; 3] = ["summary", "rotations", "hits"];

const RULE: &str = "----------------------------------------------------------";
const BANNER: &str = "==========================================================";

/// Statistics for one simulation run.
#[derive(Clone, Debug)]
pub struct RunStats {
    /// Number of instructions executed.
    pub instructions: u64,
    /// Instructions that turned the dial left.
    pub left_rotations: u64,
    /// Instructions that turned the dial right.
    pub right_rotations: u64,
    /// Total clicks across all executed instructions.
    pub clicks: u128,
    /// Complete turns of the dial (`distance / 100`, summed).
    pub full_revolutions: u128,
    /// Largest distance seen in a single instruction.
    pub max_distance: u64,

    /// Times the dial was at 0 right after an instruction completed.
    pub end_of_rotation_hits: u64,
    /// Times the dial was at 0 after any single click.
    pub pass_through_hits: u64,

    /// Position when the run began.
    pub start_position: u8,
    /// Position after the last executed instruction.
    pub final_position: u8,

    /// Wall-clock time spent executing instructions.
    pub host_time: Duration,
}

impl RunStats {
    /// Creates empty statistics for a run starting at `start_position`.
    pub const fn new(start_position: u8) -> Self {
        Self {
            instructions: 0,
            left_rotations: 0,
            right_rotations: 0,
            clicks: 0,
            full_revolutions: 0,
            max_distance: 0,
            end_of_rotation_hits: 0,
            pass_through_hits: 0,
            start_position,
            final_position: start_position,
            host_time: Duration::ZERO,
        }
    }

    /// Records the shape of an executed instruction.
    pub fn record_instruction(&mut self, inst: &Instruction) {
        self.instructions += 1;
        match inst.direction {
            Direction::Left => self.left_rotations += 1,
            Direction::Right => self.right_rotations += 1,
        }
        self.clicks += u128::from(inst.distance);
        self.full_revolutions += u128::from(inst.full_revolutions());
        self.max_distance = self.max_distance.max(inst.distance);
    }

    /// Folds the hit counters and host time of another run over the same
    /// program into this one.
    ///
    /// Instruction counts are not summed: both runs executed the same
    /// instructions, so this run's mix already describes them.
    pub fn merge_hits(&mut self, other: &Self) {
        self.end_of_rotation_hits += other.end_of_rotation_hits;
        self.pass_through_hits += other.pass_through_hits;
        self.host_time += other.host_time;
    }

    /// Renders the requested report sections; an empty list renders all of them.
    ///
    /// Unknown section names are ignored.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions.max(1);
        let mut lines = Vec::new();

        if want("summary") {
            lines.push(BANNER.to_string());
            lines.push("DIAL SIMULATION STATISTICS".to_string());
            lines.push(BANNER.to_string());
            lines.push(format!(
                "host_seconds             {:.6} s",
                self.host_time.as_secs_f64()
            ));
            lines.push(format!("sim_insts                {}", self.instructions));
            lines.push(format!("sim_clicks               {}", self.clicks));
            lines.push(format!("start_position           {}", self.start_position));
            lines.push(format!("final_position           {}", self.final_position));
            lines.push(RULE.to_string());
        }
        if want("rotations") {
            lines.push("ROTATIONS".to_string());
            lines.push(format!(
                "  rotations.left         {} ({:.2}%)",
                self.left_rotations,
                (self.left_rotations as f64 / instr as f64) * 100.0
            ));
            lines.push(format!(
                "  rotations.right        {} ({:.2}%)",
                self.right_rotations,
                (self.right_rotations as f64 / instr as f64) * 100.0
            ));
            lines.push(format!(
                "  revolutions.full       {}",
                self.full_revolutions
            ));
            lines.push(format!("  distance.max           {}", self.max_distance));
            lines.push(RULE.to_string());
        }
        if want("hits") {
            lines.push("ZERO HITS".to_string());
            lines.push(format!(
                "  hits.end_of_rotation   {}",
                self.end_of_rotation_hits
            ));
            lines.push(format!("  hits.pass_through      {}", self.pass_through_hits));
            lines.push(RULE.to_string());
        }

        lines.join("\n")
    }

    /// Prints the requested report sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        println!("{}", self.render_sections(sections));
    }

    /// Prints every report section to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new(DEFAULT_START_POSITION)
    }
}
