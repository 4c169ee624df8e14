//! Dial instruction set.
//!
//! A dial program is a list of rotations, one per line, written `L<n>` or `R<n>`.
//! This module provides:
//! 1. **Instruction types:** [`Direction`] and [`Instruction`].
//! 2. **Decoding:** Line-level parsing with blank-line skipping and line-numbered errors.
//! 3. **Programs:** The ordered, immutable result of decoding an input.

/// Line decoder.
pub mod decode;

/// Rotation direction and instruction types.
pub mod instruction;

/// Decoded instruction sequences.
pub mod program;

pub use decode::{decode, decode_line, decode_program};
pub use instruction::{Direction, Instruction};
pub use program::Program;
