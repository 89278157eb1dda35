//! # Validation-Id Lookup
//!
//! Locates the record named by an externally supplied validation id.
//!
//! The id is unique across the record set by invariant; if the invariant
//! is violated the first structural match wins. An empty or whitespace-only
//! id misses without error, and this layer makes no distinction between
//! "no id supplied" and "id not found" (the resolution flow does).

use crate::record::DocumentRecord;

/// Find the record with the given validation id.
///
/// Linear scan, first match. Returns `None` for an empty or
/// whitespace-only id and for an id no record carries.
pub fn find_by_validation_id<'a>(
    records: &'a [DocumentRecord],
    validation_id: &str,
) -> Option<&'a DocumentRecord> {
    if validation_id.trim().is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| r.validation_id.as_str() == validation_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridoc_core::{DocumentId, ValidationId};

    fn record(validation_id: &str, document_id: &str) -> DocumentRecord {
        DocumentRecord {
            document_id: DocumentId::new(document_id),
            validation_id: ValidationId::new(validation_id),
            version: "1.0.0".to_string(),
            date: "2024-01-01".to_string(),
            document_name: "Manual".to_string(),
            url: None,
            contact: None,
        }
    }

    #[test]
    fn finds_a_matching_record() {
        let records = vec![record("A", "D1"), record("B", "D1")];
        let found = find_by_validation_id(&records, "B").unwrap();
        assert_eq!(found.validation_id.as_str(), "B");
    }

    #[test]
    fn misses_an_absent_id() {
        let records = vec![record("A", "D1")];
        assert!(find_by_validation_id(&records, "Z").is_none());
    }

    #[test]
    fn empty_and_whitespace_ids_miss() {
        let records = vec![record("A", "D1")];
        assert!(find_by_validation_id(&records, "").is_none());
        assert!(find_by_validation_id(&records, "   ").is_none());
    }

    #[test]
    fn match_is_exact_not_trimmed() {
        let records = vec![record("A", "D1")];
        assert!(find_by_validation_id(&records, " A").is_none());
        assert!(find_by_validation_id(&records, "a").is_none());
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let mut first = record("A", "D1");
        first.version = "1.0.0".to_string();
        let mut second = record("A", "D2");
        second.version = "9.9.9".to_string();

        let records = vec![first, second];
        let found = find_by_validation_id(&records, "A").unwrap();
        assert_eq!(found.document_id.as_str(), "D1");
        assert_eq!(found.version, "1.0.0");
    }

    #[test]
    fn empty_record_set_misses() {
        assert!(find_by_validation_id(&[], "A").is_none());
    }
}
