//! # Dotted Version Comparison
//!
//! Defines `Version`, a dotted numeric version (`"1.0.0"`, `"2.3"`), and
//! the segment-wise ordering every lineage decision flows through.
//!
//! ## Ordering Rule
//!
//! Segments are compared pairwise from the most significant (first) to the
//! least, numerically. The shorter sequence is zero-padded to the longer
//! one's length, so `"1.0"` equals `"1.0.0"` and `"1.2.0"` sorts below
//! `"1.10.0"`. The order is total and deterministic.
//!
//! ## Strict vs Lenient Construction
//!
//! Registry records carry whatever version string their publisher wrote.
//! Resolution must be total over that data, so [`Version::parse_lenient`]
//! never fails: a missing or non-numeric segment coerces to 0. The coercion
//! can make unrelated strings compare equal (`"1.x"` == `"1.0"`), which is
//! why [`Version::parse`] exists — it rejects malformed input with a
//! structured error and backs the registry audit pass.
//!
//! Equal versions with different raw spellings (`"1.0"` vs `"1.0.0"`) are
//! `==` under the segment order; `Hash` is deliberately not implemented.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::VeridocError;

/// A dotted numeric version.
///
/// Keeps the raw string as supplied (for display) alongside the parsed
/// numeric segments (for comparison). Equality and ordering use only the
/// segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    raw: String,
    segments: Vec<u64>,
}

impl Version {
    /// Parse a version string strictly.
    ///
    /// Every dot-separated segment must be a non-empty string of ASCII
    /// digits that fits in a `u64`. Empty input, empty segments (`"1..0"`),
    /// and non-numeric segments (`"1.x.0"`) are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`VeridocError::InvalidVersion`] naming the offending
    /// segment.
    pub fn parse(s: &str) -> Result<Self, VeridocError> {
        if s.is_empty() {
            return Err(VeridocError::InvalidVersion {
                input: s.to_string(),
                reason: "empty version string".to_string(),
            });
        }
        let mut segments = Vec::new();
        for (i, seg) in s.split('.').enumerate() {
            if seg.is_empty() {
                return Err(VeridocError::InvalidVersion {
                    input: s.to_string(),
                    reason: format!("segment {i} is empty"),
                });
            }
            if !seg.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VeridocError::InvalidVersion {
                    input: s.to_string(),
                    reason: format!("segment {i} is not numeric: {seg:?}"),
                });
            }
            let value = seg.parse::<u64>().map_err(|_| VeridocError::InvalidVersion {
                input: s.to_string(),
                reason: format!("segment {i} exceeds the numeric range: {seg:?}"),
            })?;
            segments.push(value);
        }
        Ok(Self {
            raw: s.to_string(),
            segments,
        })
    }

    /// Parse a version string leniently. Never fails.
    ///
    /// Missing and non-numeric segments coerce to 0, preserving the lookup
    /// behavior the registry's consumers rely on: resolution proceeds over
    /// arbitrary registry data, and the audit pass is where malformed
    /// versions get surfaced.
    pub fn parse_lenient(s: &str) -> Self {
        let segments = s
            .split('.')
            .map(|seg| seg.parse::<u64>().unwrap_or(0))
            .collect();
        Self {
            raw: s.to_string(),
            segments,
        }
    }

    /// The version string as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed numeric segments, most significant first.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Compare two version strings under the lenient segment order.
///
/// Convenience over [`Version::parse_lenient`] for callers holding raw
/// record fields.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    Version::parse_lenient(a).cmp(&Version::parse_lenient(b))
}
