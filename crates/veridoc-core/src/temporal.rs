//! # Temporal Types — Registry Timestamps
//!
//! Defines `Timestamp`, a UTC timestamp parsed from the `date` field of a
//! registry record.
//!
//! ## Ingestion Rules
//!
//! Registry dates are externally supplied display data. Publishers write
//! full RFC 3339 timestamps (`2024-02-01T09:30:00Z`, with or without an
//! offset) and bare dates (`2024-02-01`); both must order correctly in
//! lineage tie-breaks. Inputs with an explicit offset are normalized to
//! UTC. A bare date is midnight UTC.
//!
//! A record whose `date` fails to parse is never rejected at load or
//! resolution time; callers use [`Timestamp::parse_opt`] and order `None`
//! before every parseable date. The audit pass is where bad dates get
//! surfaced.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VeridocError;

/// A UTC timestamp from a registry record's `date` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a timestamp strictly.
    ///
    /// Accepts RFC 3339 with any offset (normalized to UTC) and bare
    /// `YYYY-MM-DD` dates (midnight UTC).
    ///
    /// # Errors
    ///
    /// Returns [`VeridocError::InvalidTimestamp`] when the input matches
    /// neither form.
    pub fn parse(s: &str) -> Result<Self, VeridocError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(midnight.and_utc()));
            }
        }
        Err(VeridocError::InvalidTimestamp {
            input: s.to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DD".to_string(),
        })
    }

    /// Parse a timestamp leniently: `None` instead of an error.
    ///
    /// Lineage tie-breaks call this and treat `None` as earlier than every
    /// parseable date, so one unparseable record cannot abort resolution.
    pub fn parse_opt(s: &str) -> Option<Self> {
        Self::parse(s).ok()
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2024-02-01T09:30:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
