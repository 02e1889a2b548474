//! Custom error types for the piggy bank
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for piggy bank operations
#[derive(Error, Debug)]
pub enum PiggyError {
    /// The entered amount could not be read as a number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// A withdrawal asked for more than the balance holds
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// A persisted file exists but could not be parsed
    #[error("Corrupt file {path}: {reason}")]
    PersistenceCorrupt { path: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PiggyError {
    /// Create an "invalid amount" error for the raw user input
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    /// Create a "corrupt file" error for the given path
    pub fn corrupt(path: &Path, reason: impl ToString) -> Self {
        Self::PersistenceCorrupt {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error was caused by user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InsufficientFunds { .. }
        )
    }

    /// Check if this is a corrupt-file error
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::PersistenceCorrupt { .. })
    }
}

impl From<std::io::Error> for PiggyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for piggy bank operations
pub type PiggyResult<T> = Result<T, PiggyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PiggyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = PiggyError::invalid_amount("abc");
        assert_eq!(err.to_string(), "Invalid amount: 'abc'");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = PiggyError::InsufficientFunds {
            requested: 50.0,
            available: 30.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 50.00, available 30.50"
        );
        assert!(err.is_user_error());
    }

    #[test]
    fn test_corrupt_error() {
        let err = PiggyError::corrupt(Path::new("/tmp/deposits.json"), "expected value");
        assert!(err.is_corrupt());
        assert!(!err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Corrupt file /tmp/deposits.json: expected value"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PiggyError = io_err.into();
        assert!(matches!(err, PiggyError::Io(_)));
    }
}
