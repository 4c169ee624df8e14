//! Rotary dial simulator library.
//!
//! This crate simulates a 100-position circular dial driven by `L`/`R` rotation
//! instructions and counts how often the dial reaches position 0:
//! 1. **ISA:** The `L<n>` / `R<n>` instruction format, its decoder, and parsed programs.
//! 2. **Core:** Dial state with modular (coarse) rotation and single-click stepping.
//! 3. **Simulation:** The simulator, both counting modes, and input loading.
//! 4. **Support:** Configuration, run statistics, and error types.

/// Common types and constants (dial geometry, errors).
pub mod common;
/// Simulator configuration (start position, JSON loading).
pub mod config;
/// Dial state and rotation mechanics.
pub mod core;
/// Instruction set (direction, instruction, line decoder, program).
pub mod isa;
/// Simulator, counting modes, and input loader.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Library-wide error type.
pub use crate::common::DialError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Dial state; holds the current position.
pub use crate::core::Dial;
/// A single decoded rotation.
pub use crate::isa::{Direction, Instruction, Program};
/// Counting entry points over raw input lines.
pub use crate::sim::{count_all_zero_crossings, count_end_of_rotation_zeroes};
/// Top-level simulator and its counting mode.
pub use crate::sim::{CountMode, DialSimulator};
