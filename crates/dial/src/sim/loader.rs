//! Instruction file loading.
//!
//! Reads instruction text from a file, or from stdin when the path is `-`, and
//! decodes it into a [`Program`]. Any read failure is reported as
//! [`DialError::InputUnavailable`]; nothing is retried.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::common::DialError;
use crate::isa::{Program, decode_program};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads the whole input as text.
///
/// # Arguments
///
/// * `path` - File to read, or `-` for stdin.
///
/// # Errors
///
/// Returns [`DialError::InputUnavailable`] if the source cannot be read or is
/// not valid UTF-8.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, DialError> {
    let path = path.as_ref();
    let result = if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };

    let text = result.map_err(|source| DialError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

/// Reads the input and splits it into lines.
///
/// # Errors
///
/// Same as [`read_input`].
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, DialError> {
    Ok(read_input(path)?.lines().map(str::to_owned).collect())
}

/// Reads and decodes an instruction file.
///
/// # Errors
///
/// Returns [`DialError::InputUnavailable`] if the source cannot be read and
/// [`DialError::MalformedInstruction`] for the first invalid line.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, DialError> {
    let text = read_input(path)?;
    decode_program(text.lines())
}
