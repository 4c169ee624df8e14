//! Simulator: owns the dial, the counters, and the run statistics.
//!
//! One simulator counts in one [`CountMode`]. Both modes share the same dial
//! state machine and differ only in when they look at it: after a whole
//! rotation, or after every click.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::common::{DialError, ZERO_POSITION};
use crate::config::Config;
use crate::core::Dial;
use crate::isa::Instruction;
use crate::stats::RunStats;

/// When the simulator checks the dial for position 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountMode {
    /// Apply each rotation in one modular step and count only when it ends on 0.
    EndOfRotation,
    /// Apply each rotation click by click and count every click that lands on 0.
    EveryClick,
}

impl CountMode {
    /// Both modes, in reporting order.
    pub const ALL: [Self; 2] = [Self::EndOfRotation, Self::EveryClick];
}

impl fmt::Display for CountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfRotation => write!(f, "end-of-rotation"),
            Self::EveryClick => write!(f, "every-click"),
        }
    }
}

/// Zero-visit counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Instructions that finished with the dial at 0.
    pub end_of_rotation: u64,
    /// Individual clicks that left the dial at 0.
    pub pass_through: u64,
}

/// Top-level simulator: dial state + counters + statistics.
#[derive(Clone, Debug)]
pub struct DialSimulator {
    dial: Dial,
    mode: CountMode,
    counters: Counters,
    stats: RunStats,
}

impl DialSimulator {
    /// Creates a simulator whose dial starts at the configured position.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::InvalidStartPosition`] if the configuration does not validate.
    pub fn new(config: &Config, mode: CountMode) -> Result<Self, DialError> {
        config.validate()?;
        Ok(Self::from_dial(Dial::wrapping(config.start()), mode))
    }

    /// Creates a simulator starting at the default position (50).
    pub fn with_mode(mode: CountMode) -> Self {
        Self::from_dial(Dial::default(), mode)
    }

    fn from_dial(dial: Dial, mode: CountMode) -> Self {
        Self {
            dial,
            mode,
            counters: Counters::default(),
            stats: RunStats::new(dial.position()),
        }
    }

    /// Executes one instruction in this simulator's mode.
    pub fn step(&mut self, inst: &Instruction) {
        self.stats.record_instruction(inst);

        match self.mode {
            CountMode::EndOfRotation => {
                if self.dial.rotate(inst) == ZERO_POSITION {
                    self.counters.end_of_rotation += 1;
                    trace!(instruction = %inst, "rotation ended on zero");
                }
            }
            CountMode::EveryClick => {
                for click in 1..=inst.distance {
                    if self.dial.click(inst.direction) == ZERO_POSITION {
                        self.counters.pass_through += 1;
                        trace!(instruction = %inst, click, "click landed on zero");
                    }
                }
            }
        }

        self.stats.final_position = self.dial.position();
        self.stats.end_of_rotation_hits = self.counters.end_of_rotation;
        self.stats.pass_through_hits = self.counters.pass_through;

        debug!(
            instruction = %inst,
            position = self.dial.position(),
            count = self.count(),
            "executed rotation"
        );
    }

    /// Executes every instruction in order.
    ///
    /// # Returns
    ///
    /// The counter for this simulator's mode after the last instruction.
    pub fn run(&mut self, instructions: &[Instruction]) -> u64 {
        if instructions.is_empty() {
            warn!(mode = %self.mode, "no instructions to execute");
        }

        let started = Instant::now();
        for inst in instructions {
            self.step(inst);
        }
        self.stats.host_time += started.elapsed();

        info!(
            mode = %self.mode,
            instructions = instructions.len(),
            count = self.count(),
            final_position = self.dial.position(),
            "run complete"
        );
        self.count()
    }

    /// The counter selected by this simulator's mode.
    pub const fn count(&self) -> u64 {
        match self.mode {
            CountMode::EndOfRotation => self.counters.end_of_rotation,
            CountMode::EveryClick => self.counters.pass_through,
        }
    }

    /// Current dial position.
    pub const fn position(&self) -> u8 {
        self.dial.position()
    }

    /// The counting mode.
    pub const fn mode(&self) -> CountMode {
        self.mode
    }

    /// Both counters; only the one for this mode advances.
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Consumes the simulator, returning its statistics.
    pub fn into_stats(self) -> RunStats {
        self.stats
    }
}
