//! # veridoc-catalog — Validation-Type Categories
//!
//! The index surface of the system: which validation-type categories are
//! available. Categories come from one of two sources, in preference
//! order:
//!
//! 1. **Manifest**: a JSON or YAML file authored by the publisher, listing
//!    the categories explicitly.
//! 2. **Discovery**: an explicit configured list of known category slugs
//!    filtered through an injected existence check, the [`CategoryProbe`]
//!    trait. The only concrete probe ships as [`DirProbe`], which checks
//!    for a subdirectory per category.
//!
//! Discovery is deliberately not implicit environment probing: the caller
//! supplies both the candidate list and the probing capability, so the
//! catalog stays a pure function of its inputs.

pub mod category;
pub mod discover;
pub mod error;
pub mod manifest;

// Re-export primary types.
pub use category::ValidationCategory;
pub use discover::{discover, load_or_discover, CategoryProbe, DirProbe};
pub use error::{CatalogError, CatalogResult};
pub use manifest::CatalogManifest;
