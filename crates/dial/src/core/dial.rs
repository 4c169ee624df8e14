//! Dial position state.
//!
//! This module implements the dial itself. It performs the following:
//! 1. **Storage:** Holds one position in `0..100`.
//! 2. **Invariant Enforcement:** Every mutation wraps modulo 100, so the position
//!    can never leave the dial.
//! 3. **Movement:** Whole-rotation steps (modular arithmetic) and single clicks.

use std::fmt;

use crate::common::{DEFAULT_START_POSITION, DIAL_SIZE, DialError, ZERO_POSITION};
use crate::isa::{Direction, Instruction};

/// A 100-position circular dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dial {
    position: u8,
}

impl Dial {
    /// Creates a dial pointing at `position`.
    ///
    /// # Arguments
    ///
    /// * `position` - Initial position.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::InvalidStartPosition`] if `position >= 100`.
    pub fn new(position: u8) -> Result<Self, DialError> {
        if position >= DIAL_SIZE {
            return Err(DialError::InvalidStartPosition {
                position: position as u64,
            });
        }
        Ok(Self { position })
    }

    /// Creates a dial at `position` reduced modulo 100.
    pub const fn wrapping(position: u8) -> Self {
        Self {
            position: position % DIAL_SIZE,
        }
    }

    /// The position the dial currently points at.
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Returns `true` if the dial points at 0.
    pub const fn is_at_zero(&self) -> bool {
        self.position == ZERO_POSITION
    }

    /// Moves the dial by exactly one click.
    ///
    /// Right: 99 wraps to 0. Left: 0 wraps to 99.
    ///
    /// # Returns
    ///
    /// The new position.
    pub const fn click(&mut self, direction: Direction) -> u8 {
        self.position = match direction {
            Direction::Right => {
                if self.position == DIAL_SIZE - 1 {
                    0
                } else {
                    self.position + 1
                }
            }
            Direction::Left => {
                if self.position == 0 {
                    DIAL_SIZE - 1
                } else {
                    self.position - 1
                }
            }
        };
        self.position
    }

    /// Applies a whole rotation in one step.
    ///
    /// Equivalent to `(position + signed_distance) mod 100` with `Right` adding
    /// and `Left` subtracting. Full revolutions are discarded first, so any
    /// `u64` distance is handled without overflow.
    ///
    /// # Returns
    ///
    /// The new position.
    pub const fn rotate(&mut self, inst: &Instruction) -> u8 {
        let offset = (inst.distance % DIAL_SIZE as u64) as u8;
        self.position = match inst.direction {
            Direction::Right => (self.position + offset) % DIAL_SIZE,
            Direction::Left => (self.position + DIAL_SIZE - offset) % DIAL_SIZE,
        };
        self.position
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: DEFAULT_START_POSITION,
        }
    }
}

impl fmt::Display for Dial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.position)
    }
}
