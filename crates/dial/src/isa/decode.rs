//! Instruction decoder.
//!
//! This module turns raw text into instructions. It performs:
//! 1. **Field extraction:** Leading direction symbol, then a decimal click count.
//! 2. **Validation:** Case-sensitive direction, digits-only distance, 64-bit range.
//! 3. **Program assembly:** Whole-input decoding with blank-line skipping and
//!    1-based line numbers attached to the first failure.

use tracing::debug;

use super::instruction::{Direction, Instruction};
use super::program::Program;
use crate::common::{DialError, ParseInstructionError};

/// Decodes one already-trimmed instruction.
///
/// The distance must consist of ASCII digits only; sign characters and interior
/// whitespace are rejected.
///
/// # Arguments
///
/// * `text` - Instruction text such as `"L68"`.
///
/// # Returns
///
/// The decoded instruction, or the reason `text` is malformed.
pub fn decode(text: &str) -> Result<Instruction, ParseInstructionError> {
    let mut chars = text.chars();
    let symbol = chars
        .next()
        .ok_or(ParseInstructionError::MissingDirection)?;
    let direction =
        Direction::from_symbol(symbol).ok_or(ParseInstructionError::InvalidDirection(symbol))?;

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(ParseInstructionError::MissingDistance);
    }

    let invalid = || ParseInstructionError::InvalidDistance {
        text: digits.to_string(),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let distance = digits.parse::<u64>().map_err(|_| invalid())?;

    Ok(Instruction::new(direction, distance))
}

/// Decodes one raw input line.
///
/// Surrounding whitespace is stripped first. A line that is empty after
/// stripping yields `Ok(None)`.
pub fn decode_line(line: &str) -> Result<Option<Instruction>, ParseInstructionError> {
    let text = line.trim();
    if text.is_empty() {
        return Ok(None);
    }
    decode(text).map(Some)
}

/// Decodes every line of an input, in order.
///
/// Decoding stops at the first malformed line; no partial program is returned.
///
/// # Arguments
///
/// * `lines` - The input, one instruction per item.
///
/// # Returns
///
/// The decoded [`Program`], or [`DialError::MalformedInstruction`] naming the
/// 1-based line that failed.
pub fn decode_program<I, S>(lines: I) -> Result<Program, DialError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut instructions = Vec::new();
    let mut blank_lines = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match decode_line(line) {
            Ok(Some(inst)) => instructions.push(inst),
            Ok(None) => blank_lines += 1,
            Err(source) => {
                return Err(DialError::MalformedInstruction {
                    line: idx + 1,
                    text: line.trim().to_string(),
                    source,
                });
            }
        }
    }

    debug!(
        instructions = instructions.len(),
        blank_lines, "decoded dial program"
    );
    Ok(Program::with_blank_lines(instructions, blank_lines))
}
