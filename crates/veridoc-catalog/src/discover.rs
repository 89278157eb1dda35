//! # Probe-Based Category Discovery
//!
//! The fallback when no manifest is deployed. Discovery is an explicit
//! configured list of candidate categories filtered through an injected
//! existence check, so the catalog never probes anything the caller did
//! not name and stays testable without a filesystem.

use std::path::PathBuf;

use crate::category::ValidationCategory;
use crate::error::CatalogResult;
use crate::manifest::CatalogManifest;

/// An injected existence check for category slugs.
pub trait CategoryProbe {
    /// Whether the category named by `slug` exists in this deployment.
    fn exists(&self, slug: &str) -> bool;
}

/// A probe that checks for one subdirectory per category under a root.
#[derive(Debug, Clone)]
pub struct DirProbe {
    root: PathBuf,
}

impl DirProbe {
    /// Probe for category subdirectories under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CategoryProbe for DirProbe {
    fn exists(&self, slug: &str) -> bool {
        // A slug is a single path component; anything else cannot name a
        // category directory and must not escape the root.
        if slug.is_empty() || slug == "." || slug == ".." || slug.contains(['/', '\\']) {
            return false;
        }
        self.root.join(slug).is_dir()
    }
}

/// Filter the known categories through the probe, preserving input order.
pub fn discover(
    known: &[ValidationCategory],
    probe: &dyn CategoryProbe,
) -> Vec<ValidationCategory> {
    known
        .iter()
        .filter(|category| probe.exists(&category.slug))
        .cloned()
        .collect()
}

/// Load the manifest when it exists, otherwise fall back to discovery.
///
/// The manifest is authoritative: when present, its categories are
/// returned as written and the probe is never consulted. Manifest errors
/// other than absence propagate; a broken manifest should be fixed, not
/// silently shadowed by discovery.
pub fn load_or_discover(
    manifest_path: &std::path::Path,
    known: &[ValidationCategory],
    probe: &dyn CategoryProbe,
) -> CatalogResult<Vec<ValidationCategory>> {
    if manifest_path.exists() {
        return CatalogManifest::load(manifest_path).map(|m| m.categories);
    }
    tracing::debug!(
        manifest = %manifest_path.display(),
        known_count = known.len(),
        "manifest absent, discovering categories by probe"
    );
    Ok(discover(known, probe))
}
