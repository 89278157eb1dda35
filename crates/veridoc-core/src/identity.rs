//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two registry identifiers. These prevent
//! accidental identifier confusion — you cannot pass a `ValidationId`
//! where a `DocumentId` is expected, even though both are strings on
//! the wire.
//!
//! ## Invariant
//!
//! A `DocumentId` names a lineage: every version of the same logical
//! document shares it. A `ValidationId` names exactly one record and is
//! the external lookup key. Both are externally supplied opaque strings;
//! this crate never generates or rewrites them.

use serde::{Deserialize, Serialize};

/// Identifier for a document lineage (all versions of one logical document).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Identifier for a single registry record; the external lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationId(pub String);

impl DocumentId {
    /// Wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidationId {
    /// Wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ValidationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_roundtrips_as_plain_string() {
        let id = DocumentId::new("D1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"D1\"");
        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn validation_id_roundtrips_as_plain_string() {
        let id = ValidationId::new("VAL-2024-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"VAL-2024-001\"");
        let parsed: ValidationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn display_is_the_raw_string() {
        assert_eq!(DocumentId::new("D1").to_string(), "D1");
        assert_eq!(ValidationId::new("A").to_string(), "A");
    }
}
