//! Configuration management module
//!
//! Holds the generator configuration: password length and the two character
//! class toggles. Values of [`Configuration`] always carry a length inside
//! `MIN_LENGTH..=MAX_LENGTH`.

use crate::error::{PassgenError, Result};
use serde::Serialize;

/// Shortest password the generator produces
pub const MIN_LENGTH: usize = 6;

/// Longest password the generator produces
pub const MAX_LENGTH: usize = 100;

/// Length used when nothing else is requested
pub const DEFAULT_LENGTH: usize = 8;

/// Generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    length: usize,
    include_digits: bool,
    include_symbols: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl Configuration {
    /// Create a configuration, rejecting lengths outside `MIN_LENGTH..=MAX_LENGTH`
    pub fn new(length: usize, include_digits: bool, include_symbols: bool) -> Result<Self> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(PassgenError::validation(format!(
                "password length {} is outside the supported range {}-{}",
                length, MIN_LENGTH, MAX_LENGTH
            )));
        }
        Ok(Self {
            length,
            include_digits,
            include_symbols,
        })
    }

    /// Create a configuration, clamping the length into range
    pub fn clamped(length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            length: clamp_length(length),
            include_digits,
            include_symbols,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_digits(&self) -> bool {
        self.include_digits
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    /// Copy of this configuration with a new (clamped) length
    pub fn with_length(self, length: usize) -> Self {
        Self {
            length: clamp_length(length),
            ..self
        }
    }

    /// Copy of this configuration with digits on or off
    pub fn with_digits(self, include_digits: bool) -> Self {
        Self {
            include_digits,
            ..self
        }
    }

    /// Copy of this configuration with symbols on or off
    pub fn with_symbols(self, include_symbols: bool) -> Self {
        Self {
            include_symbols,
            ..self
        }
    }

    /// Position of the length within its range, from 0.0 to 1.0
    pub fn length_ratio(&self) -> f64 {
        (self.length - MIN_LENGTH) as f64 / (MAX_LENGTH - MIN_LENGTH) as f64
    }
}

/// Clamp a requested length into `MIN_LENGTH..=MAX_LENGTH`
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.length(), 8);
        assert!(!config.include_digits());
        assert!(!config.include_symbols());
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert!(Configuration::new(MIN_LENGTH, false, false).is_ok());
        assert!(Configuration::new(MAX_LENGTH, true, true).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for length in [0, 5, 101, 1000] {
            let err = Configuration::new(length, false, false).unwrap_err();
            assert!(matches!(err, PassgenError::Validation(_)));
        }
    }

    #[test]
    fn test_clamped_and_with_length() {
        assert_eq!(Configuration::clamped(0, false, false).length(), MIN_LENGTH);
        assert_eq!(Configuration::clamped(500, false, false).length(), MAX_LENGTH);

        let config = Configuration::default().with_length(3);
        assert_eq!(config.length(), MIN_LENGTH);
        let config = config.with_length(42);
        assert_eq!(config.length(), 42);
    }

    #[test]
    fn test_toggles_leave_length_alone() {
        let config = Configuration::default().with_length(20).with_digits(true);
        assert_eq!(config.length(), 20);
        assert!(config.include_digits());

        let config = config.with_symbols(true).with_digits(false);
        assert!(!config.include_digits());
        assert!(config.include_symbols());
        assert_eq!(config.length(), 20);
    }

    #[test]
    fn test_length_ratio() {
        assert_eq!(Configuration::clamped(MIN_LENGTH, false, false).length_ratio(), 0.0);
        assert_eq!(Configuration::clamped(MAX_LENGTH, false, false).length_ratio(), 1.0);
    }

    #[test]
    fn test_configuration_serialization() {
        let config = Configuration::new(12, true, false).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"length": 12, "includeDigits": true, "includeSymbols": false})
        );
    }
}
