//! # Lineage Resolution
//!
//! A lineage is the set of records sharing a `documentId`: the successive
//! published versions of one logical document. This module finds the
//! lineage maximum and decides whether a given record is it.
//!
//! ## Ordering
//!
//! The lineage maximum is selected under a total order: primary key is the
//! version (via the lenient segment comparison), secondary key is the date,
//! used only when two records' versions compare equal. An unparseable date
//! orders before every parseable one.
//!
//! A record whose version and date both tie the maximum counts as latest:
//! the date comparison is reflexive (`>=`), so a record is always its own
//! latest when nothing newer exists.

use std::cmp::Ordering;

use veridoc_core::{compare_versions, DocumentId};

use crate::record::DocumentRecord;

/// The newest record of the lineage named by `document_id`.
///
/// Returns `None` when no record carries the id; a normal outcome, not a
/// failure.
pub fn latest_in_lineage<'a>(
    records: &'a [DocumentRecord],
    document_id: &DocumentId,
) -> Option<&'a DocumentRecord> {
    records
        .iter()
        .filter(|r| &r.document_id == document_id)
        .max_by(|a, b| lineage_order(a, b))
}

/// Whether `record` is the newest member of its lineage within `records`.
///
/// Returns `false` when the lineage resolves to nothing. That arm is
/// practically unreachable for a record drawn from `records` (the record
/// is its own lineage member) and marks an invariant violation by the
/// caller; the function degrades gracefully instead of signaling.
pub fn is_latest(records: &[DocumentRecord], record: &DocumentRecord) -> bool {
    latest_in_lineage(records, &record.document_id)
        .is_some_and(|latest| outranks(record, latest))
}

/// Total order over lineage members: version, then date.
fn lineage_order(a: &DocumentRecord, b: &DocumentRecord) -> Ordering {
    match compare_versions(&a.version, &b.version) {
        Ordering::Equal => a.date().cmp(&b.date()),
        unequal => unequal,
    }
}

/// Whether `record` is at least as new as the lineage maximum `latest`:
/// strictly greater version, or equal version and a date no older.
pub(crate) fn outranks(record: &DocumentRecord, latest: &DocumentRecord) -> bool {
    match compare_versions(&record.version, &latest.version) {
        Ordering::Greater => true,
        Ordering::Equal => record.date() >= latest.date(),
        Ordering::Less => false,
    }
}
