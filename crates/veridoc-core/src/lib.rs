//! # veridoc-core — Foundational Types for the Veridoc Registry
//!
//! This crate is the bedrock of the veridoc workspace. It defines the
//! type-system primitives the registry and catalog crates build on.
//! Every other crate in the workspace depends on `veridoc-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `DocumentId` and
//!    `ValidationId` are distinct types with distinct meanings: the former
//!    names a document lineage, the latter names exactly one record. No
//!    bare strings for identifiers at API seams.
//!
//! 2. **Strict and lenient parsing pairs.** `Version::parse` and
//!    `Timestamp::parse` reject malformed input with structured errors;
//!    `Version::parse_lenient` and `Timestamp::parse_opt` tolerate it,
//!    because registry records are externally supplied and resolution must
//!    be total over whatever the registry contains. Strict parsers guard
//!    trust boundaries (the audit pass); lenient parsers ingest data.
//!
//! 3. **Comparison is the contract.** `Version` ordering is numeric,
//!    segment-wise, zero-padded: `"1.0"` equals `"1.0.0"` and `"1.2.0"`
//!    sorts below `"1.10.0"`. All lineage resolution flows through it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `veridoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;
pub mod version;

// Re-export primary types for ergonomic imports.
pub use error::VeridocError;
pub use identity::{DocumentId, ValidationId};
pub use temporal::Timestamp;
pub use version::{compare_versions, Version};
