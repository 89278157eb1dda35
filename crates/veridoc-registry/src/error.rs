//! Registry-specific error types.
//!
//! Structured errors for loading and validating registry documents. All
//! errors carry context (file paths, record indices, violation lists) so
//! a caller can report exactly what was wrong with the input.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaViolations;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The registry document is not a top-level JSON array.
    #[error("registry document must be a top-level array, got {found}")]
    NotAnArray { found: &'static str },

    /// A record element does not match the registry record shape.
    #[error("record {index} does not match the registry record shape: {source}")]
    RecordShape {
        index: usize,
        source: serde_json::Error,
    },

    /// The embedded registry schema could not be compiled.
    #[error("failed to compile the registry schema: {reason}")]
    SchemaCompile { reason: String },

    /// The registry document failed schema validation.
    #[error("registry failed schema validation:\n{violations}")]
    SchemaValidation { violations: SchemaViolations },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
