//! # Error Types — Structured Core Errors
//!
//! Defines the errors raised by the strict parsers in this crate. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Strict parsers fail with the offending input and a reason, so callers
//!   can report exactly which registry field was malformed.
//! - Lenient ingestion paths never construct these errors; a record with a
//!   malformed version or date still resolves (see `version` and
//!   `temporal` for the coercion rules).

use thiserror::Error;

/// Top-level error type for veridoc core parsing.
#[derive(Error, Debug)]
pub enum VeridocError {
    /// A version string failed strict parsing.
    #[error("invalid version {input:?}: {reason}")]
    InvalidVersion {
        /// The version string as supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timestamp string failed strict parsing.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The timestamp string as supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_display() {
        let err = VeridocError::InvalidVersion {
            input: "1.x.0".to_string(),
            reason: "segment 1 is not numeric".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("1.x.0"));
        assert!(msg.contains("segment 1"));
    }

    #[test]
    fn invalid_timestamp_display() {
        let err = VeridocError::InvalidTimestamp {
            input: "yesterday".to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DD".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("yesterday"));
        assert!(msg.contains("RFC 3339"));
    }
}
