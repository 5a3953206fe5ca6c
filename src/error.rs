//! Error types for validator operations.
//!
//! This module defines [`ValidatorError`], the error type for the
//! unrecoverable preconditions of a run, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Use `ValidatorError` for failures that abort a run (missing or broken inputs)
//! - Per-line problems are never errors; they become diagnostics
//! - Network failures never surface here; the rule fetcher swallows them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for validator operations.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Schema document not found or unreadable.
    #[error("Schema not found: {path}")]
    SchemaNotFound { path: PathBuf },

    /// Schema document is not valid JSON or has the wrong shape.
    #[error("Failed to parse schema at {path}: {message}")]
    SchemaParseError { path: PathBuf, message: String },

    /// The configuration file under test could not be read.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_not_found_displays_path() {
        let err = ValidatorError::SchemaNotFound {
            path: PathBuf::from("/ci/editorconfig-schema.json"),
        };
        assert!(err.to_string().contains("/ci/editorconfig-schema.json"));
    }

    #[test]
    fn schema_parse_error_displays_path_and_message() {
        let err = ValidatorError::SchemaParseError {
            path: PathBuf::from("schema.json"),
            message: "expected value at line 1 column 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("schema.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn file_not_found_displays_path() {
        let err = ValidatorError::FileNotFound {
            path: PathBuf::from("src/.editorconfig"),
        };
        assert!(err.to_string().contains("src/.editorconfig"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ValidatorError = io_err.into();
        assert!(matches!(err, ValidatorError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ValidatorError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
