//! # Catalog Manifest
//!
//! The authored category list. Publishers write it as JSON or YAML; both
//! formats flow through one load pipeline, dispatched on the file
//! extension.
//!
//! A manifest that parses but lists no categories is an authoring error
//! ([`CatalogError::EmptyManifest`]): the index surface would render
//! nothing, which is never what a publisher deployed a manifest for.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::ValidationCategory;
use crate::error::{CatalogError, CatalogResult};

/// The parsed manifest: an ordered category list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Categories in display order.
    pub categories: Vec<ValidationCategory>,
}

impl CatalogManifest {
    /// Load a manifest from a JSON or YAML file, by extension.
    ///
    /// # Errors
    ///
    /// [`CatalogError::FileNotFound`] when the path does not exist,
    /// [`CatalogError::UnsupportedFormat`] for an unknown extension,
    /// the format's parse error, or [`CatalogError::EmptyManifest`] when
    /// the category list is empty.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CatalogError::Io(e)
            }
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let manifest: Self = match extension.as_deref() {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| CatalogError::JsonParse {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| CatalogError::YamlParse {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        if manifest.categories.is_empty() {
            return Err(CatalogError::EmptyManifest {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            path = %path.display(),
            category_count = manifest.categories.len(),
            "loaded catalog manifest"
        );
        Ok(manifest)
    }
}
