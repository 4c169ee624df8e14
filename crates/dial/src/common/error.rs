//! Error types for the dial simulator.
//!
//! Two layers:
//! 1. [`ParseInstructionError`] describes why a single line is not a valid rotation.
//! 2. [`DialError`] is returned by every fallible library operation and carries
//!    the context (line number, file path) the parse error lacks.

use std::io;
use std::path::PathBuf;

use super::constants::DIAL_SIZE;

/// Reason a line of text could not be decoded into an instruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseInstructionError {
    /// The line had no characters at all.
    #[error("missing direction")]
    MissingDirection,

    /// The leading character was not `L` or `R`.
    #[error("invalid direction {0:?}, expected 'L' or 'R'")]
    InvalidDirection(char),

    /// A direction was present but nothing followed it.
    #[error("missing distance")]
    MissingDistance,

    /// The distance was not a non-negative integer that fits in 64 bits.
    #[error("invalid distance {text:?}, expected a non-negative integer")]
    InvalidDistance {
        /// The text that failed to parse.
        text: String,
    },
}

/// Error type for all fallible operations in the dial simulator.
#[derive(Debug, thiserror::Error)]
pub enum DialError {
    /// A line of input is not a valid rotation instruction.
    #[error("malformed instruction {text:?} on line {line}")]
    MalformedInstruction {
        /// 1-based line number within the input.
        line: usize,
        /// The offending line, whitespace-trimmed.
        text: String,
        /// What was wrong with it.
        #[source]
        source: ParseInstructionError,
    },

    /// The instruction source could not be read.
    #[error("cannot read input {}", .path.display())]
    InputUnavailable {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A start position does not name a point on the dial.
    #[error("start position {position} is outside the dial (0..{})", DIAL_SIZE)]
    InvalidStartPosition {
        /// The rejected position.
        position: u64,
    },

    /// A configuration file could not be read.
    #[error("cannot read config {}", .path.display())]
    ConfigUnavailable {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A configuration document is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config")]
    InvalidConfig(#[from] serde_json::Error),
}
