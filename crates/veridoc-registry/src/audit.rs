//! # Registry Audit
//!
//! The lint pass over a loaded registry. Resolution is deliberately
//! lenient (malformed versions coerce, bad dates order first, duplicate
//! ids fall back to first-match-wins); the audit is where those defects
//! get surfaced so a registry publisher can fix them.
//!
//! ## Findings
//!
//! - **Duplicate validation id**: the uniqueness invariant is violated;
//!   lookup will silently take the first match.
//! - **Malformed version**: the strict parser rejects the field; the
//!   lenient comparison will coerce segments to 0 and may equate this
//!   record's version with unrelated ones.
//! - **Unparseable date**: lineage tie-breaks will order this record
//!   before every dated one.

use std::collections::HashMap;

use veridoc_core::{Timestamp, ValidationId, Version};

use crate::record::DocumentRecord;

/// A single audit finding, anchored to a record index.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditFinding {
    /// Two records carry the same validation id.
    DuplicateValidationId {
        /// The duplicated id.
        validation_id: ValidationId,
        /// Index of the record lookup will return.
        first_index: usize,
        /// Index of the shadowed record.
        duplicate_index: usize,
    },

    /// A version string the strict parser rejects.
    MalformedVersion {
        /// Index of the record.
        index: usize,
        /// The record's validation id.
        validation_id: ValidationId,
        /// Why the strict parser rejected it.
        reason: String,
    },

    /// A date string neither RFC 3339 nor `YYYY-MM-DD`.
    UnparseableDate {
        /// Index of the record.
        index: usize,
        /// The record's validation id.
        validation_id: ValidationId,
        /// The date string as supplied.
        date: String,
    },
}

impl AuditFinding {
    /// Index of the record this finding is anchored to.
    pub fn record_index(&self) -> usize {
        match self {
            Self::DuplicateValidationId {
                duplicate_index, ..
            } => *duplicate_index,
            Self::MalformedVersion { index, .. } | Self::UnparseableDate { index, .. } => *index,
        }
    }
}

impl std::fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateValidationId {
                validation_id,
                first_index,
                duplicate_index,
            } => write!(
                f,
                "record {duplicate_index}: duplicate validationId {validation_id} (shadowed by record {first_index})"
            ),
            Self::MalformedVersion {
                index,
                validation_id,
                reason,
            } => write!(f, "record {index} ({validation_id}): {reason}"),
            Self::UnparseableDate {
                index,
                validation_id,
                date,
            } => write!(
                f,
                "record {index} ({validation_id}): unparseable date {date:?}"
            ),
        }
    }
}

/// Result of one audit pass.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Number of records examined.
    pub total: usize,
    /// Number of records with no findings.
    pub passed: usize,
    /// Every finding, in record order.
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    /// Whether the audit found nothing.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Audit a record set.
///
/// Never fails and never mutates; the report is advisory. Resolution
/// semantics are identical before and after fixing the findings, except
/// where the findings themselves describe the divergence (duplicate ids,
/// coerced versions, undated tie-breaks).
pub fn audit(records: &[DocumentRecord]) -> AuditReport {
    let mut findings = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        match first_seen.get(record.validation_id.as_str()) {
            Some(&first_index) => findings.push(AuditFinding::DuplicateValidationId {
                validation_id: record.validation_id.clone(),
                first_index,
                duplicate_index: index,
            }),
            None => {
                first_seen.insert(record.validation_id.as_str(), index);
            }
        }

        if let Err(e) = Version::parse(&record.version) {
            findings.push(AuditFinding::MalformedVersion {
                index,
                validation_id: record.validation_id.clone(),
                reason: e.to_string(),
            });
        }

        if Timestamp::parse_opt(&record.date).is_none() {
            findings.push(AuditFinding::UnparseableDate {
                index,
                validation_id: record.validation_id.clone(),
                date: record.date.clone(),
            });
        }
    }

    let mut flagged: Vec<usize> = findings.iter().map(AuditFinding::record_index).collect();
    flagged.sort_unstable();
    flagged.dedup();

    AuditReport {
        total: records.len(),
        passed: records.len() - flagged.len(),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridoc_core::DocumentId;

    fn record(document_id: &str, validation_id: &str, version: &str, date: &str) -> DocumentRecord {
        DocumentRecord {
            document_id: DocumentId::new(document_id),
            validation_id: ValidationId::new(validation_id),
            version: version.to_string(),
            date: date.to_string(),
            document_name: "Manual".to_string(),
            url: None,
            contact: None,
        }
    }

    #[test]
    fn clean_registry_has_no_findings() {
        let records = vec![
            record("D1", "A", "1.0.0", "2024-01-01"),
            record("D1", "B", "2.0.0", "2024-02-01"),
        ];
        let report = audit(&records);
        assert!(report.is_clean());
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 2);
    }

    #[test]
    fn flags_duplicate_validation_ids() {
        let records = vec![
            record("D1", "A", "1.0.0", "2024-01-01"),
            record("D2", "A", "1.0.0", "2024-01-01"),
        ];
        let report = audit(&records);
        assert_eq!(report.findings.len(), 1);
        match &report.findings[0] {
            AuditFinding::DuplicateValidationId {
                validation_id,
                first_index,
                duplicate_index,
            } => {
                assert_eq!(validation_id.as_str(), "A");
                assert_eq!(*first_index, 0);
                assert_eq!(*duplicate_index, 1);
            }
            other => panic!("expected DuplicateValidationId, got {other}"),
        }
        // The shadowed record is the flagged one.
        assert_eq!(report.passed, 1);
    }

    #[test]
    fn flags_malformed_versions() {
        let records = vec![record("D1", "A", "1.x.0", "2024-01-01")];
        let report = audit(&records);
        assert_eq!(report.findings.len(), 1);
        assert!(matches!(
            report.findings[0],
            AuditFinding::MalformedVersion { index: 0, .. }
        ));
        assert_eq!(report.passed, 0);
    }

    #[test]
    fn flags_unparseable_dates() {
        let records = vec![record("D1", "A", "1.0.0", "last tuesday")];
        let report = audit(&records);
        assert_eq!(report.findings.len(), 1);
        assert!(matches!(
            report.findings[0],
            AuditFinding::UnparseableDate { index: 0, .. }
        ));
    }

    #[test]
    fn one_record_can_carry_multiple_findings() {
        let records = vec![
            record("D1", "A", "1.0.0", "2024-01-01"),
            record("D1", "A", "bad", "never"),
        ];
        let report = audit(&records);
        assert_eq!(report.findings.len(), 3);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
    }

    #[test]
    fn findings_render_with_record_indices() {
        let records = vec![
            record("D1", "A", "1.0.0", "2024-01-01"),
            record("D1", "A", "1.0.0", "2024-01-01"),
        ];
        let report = audit(&records);
        let rendered = report.findings[0].to_string();
        assert!(rendered.contains("record 1"));
        assert!(rendered.contains('A'));
    }

    #[test]
    fn bare_dates_and_full_timestamps_both_pass() {
        let records = vec![
            record("D1", "A", "1.0.0", "2024-01-01"),
            record("D1", "B", "1.0.1", "2024-02-01T09:30:00Z"),
        ];
        assert!(audit(&records).is_clean());
    }
}
