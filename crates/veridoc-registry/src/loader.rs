//! # Registry Loader
//!
//! Loads a registry from a JSON document: a top-level array of record
//! objects. Anything else (an object, a string, a bare number) fails with
//! [`RegistryError::NotAnArray`] naming what was found, and a record that
//! does not match the wire shape fails with its index.
//!
//! Field contents stay permissive here: a loaded record may still carry a
//! malformed version or date. The loader enforces structure; the audit and
//! schema passes enforce content.

use std::path::Path;

use serde_json::Value;

use veridoc_core::DocumentId;

use crate::audit::{audit, AuditReport};
use crate::error::{RegistryError, RegistryResult};
use crate::lineage::{is_latest, latest_in_lineage};
use crate::lookup::find_by_validation_id;
use crate::record::DocumentRecord;
use crate::resolve::{resolve, Resolution};

/// An immutable, ordered set of document records.
///
/// The record set is read-only for the lifetime of one query; every
/// resolution method is a pure function of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    records: Vec<DocumentRecord>,
}

impl Registry {
    /// Build a registry from already-deserialized records.
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    /// Load a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// [`RegistryError::FileNotFound`] when the path does not exist,
    /// [`RegistryError::JsonParse`] when the file is not valid JSON, and
    /// the structural errors of [`Registry::from_value`].
    pub fn from_path(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RegistryError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RegistryError::Io(e)
            }
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| RegistryError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let registry = Self::from_value(value)?;
        tracing::debug!(
            path = %path.display(),
            record_count = registry.len(),
            "loaded registry"
        );
        Ok(registry)
    }

    /// Load a registry from a JSON string.
    pub fn from_json_str(json: &str) -> RegistryResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a registry from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotAnArray`] when the value is not a top-level
    /// array; [`RegistryError::RecordShape`] with the element index when a
    /// record does not match the wire shape.
    pub fn from_value(value: Value) -> RegistryResult<Self> {
        let Value::Array(elements) = value else {
            return Err(RegistryError::NotAnArray {
                found: value_type_name(&value),
            });
        };
        let mut records = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let record: DocumentRecord = serde_json::from_value(element)
                .map_err(|source| RegistryError::RecordShape { index, source })?;
            records.push(record);
        }
        Ok(Self { records })
    }

    /// The records, in registry order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Iterate the records in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the record with the given validation id. See
    /// [`find_by_validation_id`].
    pub fn find(&self, validation_id: &str) -> Option<&DocumentRecord> {
        find_by_validation_id(&self.records, validation_id)
    }

    /// The newest record of a lineage. See [`latest_in_lineage`].
    pub fn latest_in_lineage(&self, document_id: &DocumentId) -> Option<&DocumentRecord> {
        latest_in_lineage(&self.records, document_id)
    }

    /// Whether `record` is the newest member of its lineage. See
    /// [`is_latest`].
    pub fn is_latest(&self, record: &DocumentRecord) -> bool {
        is_latest(&self.records, record)
    }

    /// Resolve a raw query id to a terminal state. See [`resolve`].
    pub fn resolve(&self, query: Option<&str>) -> Resolution<'_> {
        resolve(&self.records, query)
    }

    /// Run the lint pass over the records. See [`audit`].
    pub fn audit(&self) -> AuditReport {
        audit(&self.records)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// JSON type name for error reporting.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &str = r#"[
        {
            "documentId": "D1",
            "validationId": "A",
            "version": "1.0.0",
            "date": "2024-01-01",
            "documentName": "Manual"
        },
        {
            "documentId": "D1",
            "validationId": "B",
            "version": "2.0.0",
            "date": "2024-02-01",
            "documentName": "Manual"
        }
    ]"#;

    #[test]
    fn loads_a_top_level_array() {
        let registry = Registry::from_json_str(TWO_RECORDS).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert_eq!(registry.records()[0].validation_id.as_str(), "A");
    }

    #[test]
    fn empty_array_is_a_valid_registry() {
        let registry = Registry::from_json_str("[]").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_top_level_object() {
        let err = Registry::from_json_str(r#"{"records": []}"#).unwrap_err();
        match err {
            RegistryError::NotAnArray { found } => assert_eq!(found, "object"),
            other => panic!("expected NotAnArray, got {other}"),
        }
    }

    #[test]
    fn rejects_top_level_string_and_null() {
        assert!(matches!(
            Registry::from_json_str(r#""records""#),
            Err(RegistryError::NotAnArray { found: "string" })
        ));
        assert!(matches!(
            Registry::from_json_str("null"),
            Err(RegistryError::NotAnArray { found: "null" })
        ));
    }

    #[test]
    fn rejects_malformed_record_with_its_index() {
        let json = r#"[
            {
                "documentId": "D1",
                "validationId": "A",
                "version": "1.0.0",
                "date": "2024-01-01",
                "documentName": "Manual"
            },
            {"documentId": "D2"}
        ]"#;
        let err = Registry::from_json_str(json).unwrap_err();
        match err {
            RegistryError::RecordShape { index, .. } => assert_eq!(index, 1),
            other => panic!("expected RecordShape, got {other}"),
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(Registry::from_json_str("[{").is_err());
    }

    #[test]
    fn from_path_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Registry::from_path(&path).unwrap_err();
        assert!(matches!(err, RegistryError::FileNotFound { .. }));
    }

    #[test]
    fn from_path_loads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(&path, TWO_RECORDS).unwrap();
        let registry = Registry::from_path(&path).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn iteration_preserves_registry_order() {
        let registry = Registry::from_json_str(TWO_RECORDS).unwrap();
        let ids: Vec<&str> = registry
            .iter()
            .map(|r| r.validation_id.as_str())
            .collect();
        assert_eq!(ids, ["A", "B"]);
    }
}
