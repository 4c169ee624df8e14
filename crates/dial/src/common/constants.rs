//! Dial geometry.

/// Number of distinct positions on the dial (`0..DIAL_SIZE`).
pub const DIAL_SIZE: u8 = 100;

/// Position the dial points at when a run begins.
pub const DEFAULT_START_POSITION: u8 = 50;

/// The position whose visits are counted.
pub const ZERO_POSITION: u8 = 0;
