//! # Resolution Flow
//!
//! The deterministic decision tree over a raw query id: no retries, no
//! loops, no partial states. Exactly one of four terminal states comes
//! out, and resolving the same id twice against an unchanged record set
//! yields identical results.

use serde::Serialize;

use crate::lineage::{latest_in_lineage, outranks};
use crate::lookup::find_by_validation_id;
use crate::record::DocumentRecord;

/// Terminal state of one resolution. A closed variant; there is no fifth
/// state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Resolution<'a> {
    /// No id was supplied; the resolver was never invoked.
    NoId,
    /// The id matched no record.
    NotFound,
    /// The record exists and is the newest member of its lineage.
    Latest {
        /// The matched record.
        record: &'a DocumentRecord,
    },
    /// The record exists but a newer lineage member supersedes it.
    Outdated {
        /// The matched record.
        record: &'a DocumentRecord,
        /// The lineage's newest member.
        latest: &'a DocumentRecord,
    },
}

impl<'a> Resolution<'a> {
    /// The matched record, when the id resolved to one.
    pub fn record(&self) -> Option<&'a DocumentRecord> {
        match self {
            Self::Latest { record } | Self::Outdated { record, .. } => Some(*record),
            Self::NoId | Self::NotFound => None,
        }
    }

    /// Whether the id resolved to an existing record (latest or not).
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Latest { .. } | Self::Outdated { .. })
    }
}

impl std::fmt::Display for Resolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoId => "NO_ID",
            Self::NotFound => "NOT_FOUND",
            Self::Latest { .. } => "LATEST",
            Self::Outdated { .. } => "OUTDATED",
        };
        f.write_str(s)
    }
}

/// Resolve a raw query id against the record set.
///
/// 1. Absent, empty, or whitespace-only id: [`Resolution::NoId`], without
///    invoking the resolver.
/// 2. Lookup miss: [`Resolution::NotFound`].
/// 3. The matched record is its lineage's newest: [`Resolution::Latest`].
/// 4. Otherwise: [`Resolution::Outdated`] carrying both the matched record
///    and the lineage maximum.
///
/// The matched record is itself a lineage member, so its lineage always
/// resolves; if that invariant is ever violated the flow degrades to
/// `Latest` rather than fabricating a lineage maximum.
pub fn resolve<'a>(records: &'a [DocumentRecord], query: Option<&str>) -> Resolution<'a> {
    let id = match query {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Resolution::NoId,
    };
    let Some(record) = find_by_validation_id(records, id) else {
        return Resolution::NotFound;
    };
    match latest_in_lineage(records, &record.document_id) {
        Some(latest) if !outranks(record, latest) => Resolution::Outdated { record, latest },
        _ => Resolution::Latest { record },
    }
}
