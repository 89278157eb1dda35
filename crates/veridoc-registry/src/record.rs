//! # Document Record
//!
//! The immutable, externally supplied unit of the registry: one published
//! version of one logical document.
//!
//! ## Invariants
//!
//! - `validation_id` is unique across the full record set; lookup assumes
//!   at most one match and takes the first if the invariant is violated.
//! - Multiple records may share a `document_id` (a lineage).
//! - No record is ever mutated; the set is read-only input for the
//!   lifetime of one query.
//!
//! `version` and `date` are kept verbatim as supplied. Typed views
//! ([`DocumentRecord::version`], [`DocumentRecord::date`]) parse leniently
//! at comparison time, so a malformed field never rejects the record; the
//! audit pass is where malformed fields get surfaced.

use serde::{Deserialize, Serialize};

use veridoc_core::{DocumentId, Timestamp, ValidationId, Version};

/// One published version of a logical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Lineage key: all versions of the same logical document share it.
    pub document_id: DocumentId,
    /// Unique per record; the external lookup key.
    pub validation_id: ValidationId,
    /// Dotted numeric version, as supplied (e.g. `"1.0.0"`).
    pub version: String,
    /// ISO 8601 timestamp string, as supplied.
    pub date: String,
    /// Human-readable label.
    pub document_name: String,
    /// Display-only link to the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display-only contact for the publishing party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl DocumentRecord {
    /// The record's version under the lenient segment parse.
    pub fn version(&self) -> Version {
        Version::parse_lenient(&self.version)
    }

    /// The record's date, `None` when the field does not parse.
    ///
    /// Callers order `None` before every parseable date, so one bad field
    /// cannot abort lineage resolution.
    pub fn date(&self) -> Option<Timestamp> {
        Timestamp::parse_opt(&self.date)
    }
}
