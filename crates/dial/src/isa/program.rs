//! Decoded dial programs.

use std::str::FromStr;

use super::instruction::Instruction;
use crate::common::DialError;

/// An ordered, immutable sequence of rotations.
///
/// Instructions are kept in input order and never reordered. The number of
/// blank lines skipped while decoding is retained for reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    blank_lines: usize,
}

impl Program {
    /// Creates a program from already-decoded instructions.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self::with_blank_lines(instructions, 0)
    }

    pub(crate) const fn with_blank_lines(instructions: Vec<Instruction>, blank_lines: usize) -> Self {
        Self {
            instructions,
            blank_lines,
        }
    }

    /// Decodes a whole text, one instruction per line.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::MalformedInstruction`] for the first invalid line.
    pub fn parse(text: &str) -> Result<Self, DialError> {
        super::decode_program(text.lines())
    }

    /// The instructions, in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of blank lines skipped while decoding.
    pub const fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    /// Total clicks across every instruction.
    pub fn total_clicks(&self) -> u128 {
        self.instructions
            .iter()
            .map(|inst| u128::from(inst.distance))
            .sum()
    }
}

impl FromStr for Program {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl AsRef<[Instruction]> for Program {
    fn as_ref(&self) -> &[Instruction] {
        &self.instructions
    }
}
