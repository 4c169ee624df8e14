//! Common utilities and types shared across the dial simulator.
//!
//! This module provides:
//! 1. **Constants:** Dial geometry and the default start position.
//! 2. **Error Handling:** Parse errors for single lines and the library-wide error type.

/// Dial geometry constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{DEFAULT_START_POSITION, DIAL_SIZE, ZERO_POSITION};
pub use error::{DialError, ParseInstructionError};
