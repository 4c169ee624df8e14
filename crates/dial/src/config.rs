//! Configuration for the dial simulator.
//!
//! The only tunable is where the dial points when a run begins. Configuration is
//! supplied as JSON (`{"start_position": 50}`) or built with `Config::default()`.
//! Missing fields take their defaults; unknown fields are rejected.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{DEFAULT_START_POSITION, DIAL_SIZE, DialError};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial dial position; must lie in `0..100`.
    #[serde(default = "Config::default_start_position")]
    pub start_position: u64,
}

impl Config {
    /// Returns the default starting position.
    const fn default_start_position() -> u64 {
        DEFAULT_START_POSITION as u64
    }

    /// Creates a validated configuration starting at `start_position`.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::InvalidStartPosition`] if the position is off the dial.
    pub fn with_start_position(start_position: u64) -> Result<Self, DialError> {
        let config = Self { start_position };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::InvalidConfig`] for malformed JSON and
    /// [`DialError::InvalidStartPosition`] for an out-of-range position.
    pub fn from_json(json: &str) -> Result<Self, DialError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::ConfigUnavailable`] if the file cannot be read,
    /// otherwise the same errors as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DialError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DialError::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that the start position lies on the dial.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::InvalidStartPosition`] if it does not.
    pub fn validate(&self) -> Result<(), DialError> {
        if self.start_position >= DIAL_SIZE as u64 {
            return Err(DialError::InvalidStartPosition {
                position: self.start_position,
            });
        }
        Ok(())
    }

    /// The start position as a dial position.
    ///
    /// Callers are expected to have validated the config; an out-of-range value
    /// is reduced modulo the dial size.
    pub const fn start(&self) -> u8 {
        (self.start_position % DIAL_SIZE as u64) as u8
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_position: Self::default_start_position(),
        }
    }
}
