//! # veridoc-cli — CLI Tool for the Veridoc Registry
//!
//! Provides the `veridoc` command-line interface over the registry and
//! catalog crates.
//!
//! ## Subcommands
//!
//! - `veridoc resolve` — Resolve a validation id to its terminal state.
//! - `veridoc categories` — List validation-type categories from a
//!   manifest or by probe-based discovery.
//! - `veridoc check` — Schema-validate and audit a registry file.
//!
//! ## Exit Codes
//!
//! Handlers return their exit code rather than calling `process::exit`,
//! so every path unwinds normally. `resolve` maps terminal states to
//! 0 (`Latest`), 1 (`Outdated`), and 2 (`NotFound`, `NoId`); `categories`
//! and `check` use 0 for a clean pass and 1 otherwise. Operational errors
//! (unreadable files, invalid JSON) surface through `anyhow` and exit
//! with 2.

pub mod categories;
pub mod check;
pub mod resolve;
