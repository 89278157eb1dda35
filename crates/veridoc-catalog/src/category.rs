//! # Validation Category
//!
//! One entry of the catalog: a validation-type category the index surface
//! lists (e.g. manuals, datasheets, certificates). The slug doubles as the
//! category's storage key, so a deployment lays out one subdirectory per
//! slug.

use serde::{Deserialize, Serialize};

/// A validation-type category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationCategory {
    /// Storage key; names the category's subdirectory in probe mode.
    pub slug: String,
    /// Human-readable label.
    pub label: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ValidationCategory {
    /// Build a category whose label is its slug.
    ///
    /// Probe mode starts from bare slugs; the manifest is where labels
    /// come from.
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            label: slug.clone(),
            slug,
            description: None,
        }
    }
}

impl std::fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.label == self.slug {
            f.write_str(&self.slug)
        } else {
            write!(f, "{} ({})", self.label, self.slug)
        }
    }
}
