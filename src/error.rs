//! Custom error types for fintro
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintro operations
#[derive(Error, Debug)]
pub enum FintroError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for sample data and CLI arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Chart series errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FintroError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FintroError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintroError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintro operations
pub type FintroResult<T> = Result<T, FintroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintroError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_check() {
        let err = FintroError::Validation("bad amount".into());
        assert!(err.is_validation());
        assert!(!FintroError::Chart("oops".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fintro_err: FintroError = io_err.into();
        assert!(matches!(fintro_err, FintroError::Io(_)));
    }
}
