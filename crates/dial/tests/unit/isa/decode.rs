//! # Decoder Tests
//!
//! Accepted and rejected instruction spellings.

use dialsim_core::common::ParseInstructionError;
use dialsim_core::isa::{decode_line, Direction, Instruction};
use rstest::rstest;

#[rstest]
#[case("L68", Instruction::left(68))]
#[case("R48", Instruction::right(48))]
#[case("R0", Instruction::right(0))]
#[case("  R14\t", Instruction::right(14))]
#[case("L007", Instruction::left(7))]
#[case("R18446744073709551615", Instruction::right(u64::MAX))]
fn test_decodes_valid_instruction(#[case] text: &str, #[case] expected: Instruction) {
    assert_eq!(text.parse::<Instruction>(), Ok(expected));
}

#[rstest]
#[case("X10", ParseInstructionError::InvalidDirection('X'))]
#[case("l5", ParseInstructionError::InvalidDirection('l'))]
#[case("5R", ParseInstructionError::InvalidDirection('5'))]
#[case("R", ParseInstructionError::MissingDistance)]
#[case("  L  ", ParseInstructionError::MissingDistance)]
#[case("", ParseInstructionError::MissingDirection)]
fn test_rejects_malformed_instruction(#[case] text: &str, #[case] expected: ParseInstructionError) {
    assert_eq!(text.parse::<Instruction>(), Err(expected));
}

#[rstest]
#[case("R1 0", "1 0")]
#[case("L-3", "-3")]
#[case("R+3", "+3")]
#[case("R1_000", "1_000")]
#[case("Rten", "ten")]
#[case("R18446744073709551616", "18446744073709551616")]
fn test_rejects_invalid_distance(#[case] text: &str, #[case] bad: &str) {
    assert_eq!(
        text.parse::<Instruction>(),
        Err(ParseInstructionError::InvalidDistance {
            text: bad.to_string()
        })
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\r")]
fn test_blank_lines_decode_to_nothing(#[case] line: &str) {
    assert_eq!(decode_line(line), Ok(None));
}

#[test]
fn test_instruction_display_matches_input_form() {
    assert_eq!(Instruction::left(68).to_string(), "L68");
    assert_eq!(Instruction::right(0).to_string(), "R0");
}

#[test]
fn test_direction_symbols() {
    assert_eq!(Direction::from_symbol('L'), Some(Direction::Left));
    assert_eq!(Direction::from_symbol('R'), Some(Direction::Right));
    assert_eq!(Direction::from_symbol('r'), None);
    assert_eq!(Direction::Left.symbol(), 'L');
    assert_eq!(Direction::Right.to_string(), "right");
}

#[test]
fn test_full_revolutions() {
    assert_eq!(Instruction::right(99).full_revolutions(), 0);
    assert_eq!(Instruction::right(100).full_revolutions(), 1);
    assert_eq!(Instruction::left(250).full_revolutions(), 2);
}
