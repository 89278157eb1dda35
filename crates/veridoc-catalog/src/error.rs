//! Catalog-specific error types.
//!
//! Structured errors for manifest loading. All errors carry the file path
//! so a caller can report exactly which manifest was wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The manifest extension is neither JSON nor YAML.
    #[error("unsupported manifest format at {path} (expected .json, .yaml, or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// The manifest parsed but lists no categories.
    #[error("manifest at {path} lists no categories")]
    EmptyManifest { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
