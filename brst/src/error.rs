//! Error handling module for the brst CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use brsc_lex::LexError;
use thiserror::Error;

/// Main error type for the brst CLI application.
#[derive(Error, Debug)]
pub enum BrstError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file could not be scanned.
    #[error("{}: {source}", path.display())]
    Lex {
        /// File that was being scanned.
        path: PathBuf,
        /// The first lexical error in that file.
        source: LexError,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using BrstError.
pub type Result<T> = std::result::Result<T, BrstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = BrstError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = BrstError::Validation("no input files".to_string());
        assert_eq!(err.to_string(), "Validation error: no input files");
    }

    #[test]
    fn test_lex_error_display() {
        let err = BrstError::Lex {
            path: PathBuf::from("main.brs"),
            source: LexError::UnterminatedString { line: 2, column: 5 },
        };
        assert_eq!(
            err.to_string(),
            "main.brs: unterminated string literal at 2:5"
        );
    }

    #[test]
    fn test_lex_error_source() {
        use std::error::Error as _;

        let err = BrstError::Lex {
            path: PathBuf::from("main.brs"),
            source: LexError::UnexpectedChar {
                ch: '@',
                line: 1,
                column: 1,
            },
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let brst_err: BrstError = io_err.into();
        assert!(matches!(brst_err, BrstError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let brst_err: BrstError = json_err.into();
        assert!(matches!(brst_err, BrstError::Json(_)));
    }
}
