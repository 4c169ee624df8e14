//! Core dial implementation.
//!
//! This module holds the dial's architectural state: a single position on a
//! 100-slot ring, with two ways of moving it (a whole rotation at once, or one
//! click at a time).

/// Dial position register and rotation mechanics.
pub mod dial;

pub use self::dial::Dial;
