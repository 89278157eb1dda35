//! # Registry Schema Validation
//!
//! Runtime validation of raw registry documents against the embedded JSON
//! Schema (Draft 2020-12) in `schemas/registry.schema.json`.
//!
//! The loader stays permissive about field contents so resolution is total
//! over whatever a registry contains; this module is the strict pass. A
//! document that fails validation is reported with a structured violation
//! list: the JSON Pointer to each violating field plus a human-readable
//! message.

use serde_json::Value;

use crate::error::{RegistryError, RegistryResult};

/// The embedded registry schema, compiled per validation call.
const REGISTRY_SCHEMA: &str = include_str!("../schemas/registry.schema.json");

/// A single schema violation.
#[derive(Debug, Clone)]
pub struct SchemaViolation {
    /// JSON Pointer to the violating field (empty for the document root).
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.instance_path.is_empty() {
            "/"
        } else {
            &self.instance_path
        };
        write!(f, "at {path}: {}", self.message)
    }
}

/// All violations found in one document.
#[derive(Debug, Clone)]
pub struct SchemaViolations(Vec<SchemaViolation>);

impl SchemaViolations {
    /// The individual violations, in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, SchemaViolation> {
        self.0.iter()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty (never true for a raised error).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

/// Validate a raw registry document against the embedded schema.
///
/// # Errors
///
/// [`RegistryError::SchemaValidation`] carrying every violation found, or
/// [`RegistryError::SchemaCompile`] if the embedded schema itself cannot
/// be compiled.
pub fn validate_registry_value(value: &Value) -> RegistryResult<()> {
    let schema: Value =
        serde_json::from_str(REGISTRY_SCHEMA).map_err(|e| RegistryError::SchemaCompile {
            reason: e.to_string(),
        })?;

    let validator = jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&schema)
        .map_err(|e| RegistryError::SchemaCompile {
            reason: e.to_string(),
        })?;

    let violations: Vec<SchemaViolation> = validator
        .iter_errors(value)
        .map(|err| SchemaViolation {
            instance_path: err.instance_path.to_string(),
            message: err.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RegistryError::SchemaValidation {
            violations: SchemaViolations(violations),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registry() -> Value {
        serde_json::json!([
            {
                "documentId": "D1",
                "validationId": "A",
                "version": "1.0.0",
                "date": "2024-01-01",
                "documentName": "Manual"
            }
        ])
    }

    #[test]
    fn accepts_a_valid_registry() {
        assert!(validate_registry_value(&valid_registry()).is_ok());
    }

    #[test]
    fn accepts_an_empty_array() {
        assert!(validate_registry_value(&serde_json::json!([])).is_ok());
    }

    #[test]
    fn rejects_a_top_level_object() {
        let err = validate_registry_value(&serde_json::json!({})).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaValidation { .. }));
    }

    #[test]
    fn flags_a_missing_required_field_with_its_path() {
        let doc = serde_json::json!([
            {
                "documentId": "D1",
                "version": "1.0.0",
                "date": "2024-01-01",
                "documentName": "Manual"
            }
        ]);
        let err = validate_registry_value(&doc).unwrap_err();
        let RegistryError::SchemaValidation { violations } = err else {
            panic!("expected SchemaValidation");
        };
        assert_eq!(violations.len(), 1);
        let violation = violations.iter().next().unwrap();
        assert_eq!(violation.instance_path, "/0");
        assert!(violation.message.contains("validationId"));
    }

    #[test]
    fn flags_a_malformed_version_pattern() {
        let mut doc = valid_registry();
        doc[0]["version"] = serde_json::json!("1.x.0");
        let err = validate_registry_value(&doc).unwrap_err();
        let RegistryError::SchemaValidation { violations } = err else {
            panic!("expected SchemaValidation");
        };
        assert!(violations
            .iter()
            .any(|v| v.instance_path == "/0/version"));
    }

    #[test]
    fn collects_every_violation_not_just_the_first() {
        let doc = serde_json::json!([
            {"documentId": "D1"},
            {"documentId": "D2"}
        ]);
        let err = validate_registry_value(&doc).unwrap_err();
        let RegistryError::SchemaValidation { violations } = err else {
            panic!("expected SchemaValidation");
        };
        assert!(violations.len() >= 2);
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let mut doc = valid_registry();
        doc[0]["revision"] = serde_json::json!("r7");
        assert!(validate_registry_value(&doc).is_ok());
    }

    #[test]
    fn violations_display_lists_each_violation() {
        let doc = serde_json::json!([{"documentId": "D1"}]);
        let err = validate_registry_value(&doc).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("schema validation"));
        assert!(msg.contains("/0"));
    }
}
