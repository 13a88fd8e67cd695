//! Error types and handling for deanchor
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for deanchor operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeanchorError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(deanchor::fs::not_found),
        help("Check that the path is correct and the file exists")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(deanchor::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(deanchor::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(deanchor::fs::io_error))]
    IoError { message: String },

    // Document errors
    #[error("Failed to parse document: {path}")]
    #[diagnostic(
        code(deanchor::document::parse_failed),
        help("Check that the file is well-formed YAML")
    )]
    ParseFailed { path: String, reason: String },

    #[error(
        "Invalid merge key value in {path}: expected a mapping or a sequence of mappings, found {found}"
    )]
    #[diagnostic(
        code(deanchor::document::invalid_merge),
        help("A '<<' entry must reference a mapping or a sequence of mappings")
    )]
    InvalidMergeValue { path: String, found: String },

    #[error("Failed to serialize document: {reason}")]
    #[diagnostic(code(deanchor::document::serialize_failed))]
    SerializeFailed { reason: String },
}

impl From<std::io::Error> for DeanchorError {
    fn from(err: std::io::Error) -> Self {
        DeanchorError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeanchorError>;
