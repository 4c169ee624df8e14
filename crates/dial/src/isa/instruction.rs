//! Rotation instruction definitions.
//!
//! An [`Instruction`] is a direction plus a click count. It is immutable once
//! decoded and formats back to its source text (`L68`, `R14`).

use std::fmt;
use std::str::FromStr;

use crate::common::ParseInstructionError;

/// Direction of a rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward lower numbers (`L`); 0 wraps to 99.
    Left,
    /// Toward higher numbers (`R`); 99 wraps to 0.
    Right,
}

impl Direction {
    /// Maps an input symbol to a direction. Matching is case-sensitive.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Leading character of an instruction line.
    ///
    /// # Returns
    ///
    /// `Some(direction)` for `'L'` or `'R'`, `None` for anything else.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// The input symbol for this direction.
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// One rotation: turn the dial `distance` clicks in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Which way to turn.
    pub direction: Direction,
    /// Number of clicks.
    pub distance: u64,
}

impl Instruction {
    /// Creates a new instruction.
    pub const fn new(direction: Direction, distance: u64) -> Self {
        Self {
            direction,
            distance,
        }
    }

    /// Shorthand for `Instruction::new(Direction::Left, distance)`.
    pub const fn left(distance: u64) -> Self {
        Self::new(Direction::Left, distance)
    }

    /// Shorthand for `Instruction::new(Direction::Right, distance)`.
    pub const fn right(distance: u64) -> Self {
        Self::new(Direction::Right, distance)
    }

    /// Number of complete turns of the dial contained in this rotation.
    pub const fn full_revolutions(&self) -> u64 {
        self.distance / crate::common::DIAL_SIZE as u64
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.symbol(), self.distance)
    }
}

impl FromStr for Instruction {
    type Err = ParseInstructionError;

    /// Parses a single instruction, ignoring surrounding whitespace.
    ///
    /// Unlike [`decode_line`](super::decode_line), blank input is an error here
    /// because there is no instruction to return.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::decode(s.trim())
    }
}
