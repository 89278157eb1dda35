//! # Categories Subcommand
//!
//! Lists the validation-type categories available in a deployment, from a
//! manifest file, by probe-based discovery over a known slug list, or
//! manifest-first with discovery as the fallback when both are given.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use veridoc_catalog::{discover, load_or_discover, CatalogManifest, DirProbe, ValidationCategory};

/// Arguments for the `veridoc categories` subcommand.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Path to a catalog manifest (.json, .yaml, or .yml).
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Root directory holding one subdirectory per category (probe mode).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Known category slugs to probe for, comma-separated.
    #[arg(long, value_delimiter = ',', value_name = "SLUGS")]
    pub known: Vec<String>,

    /// Emit the categories as JSON instead of one line per category.
    #[arg(long)]
    pub json: bool,
}

/// Execute the categories subcommand.
///
/// Exit code: 0 with at least one category listed, 1 when none are
/// available, 2 for unusable arguments.
pub fn run_categories(args: &CategoriesArgs) -> Result<u8> {
    let known: Vec<ValidationCategory> = args
        .known
        .iter()
        .map(ValidationCategory::from_slug)
        .collect();

    let categories = match (&args.manifest, &args.root) {
        (Some(manifest), Some(root)) => {
            load_or_discover(manifest, &known, &DirProbe::new(root)).with_context(|| {
                format!("failed to load categories from {}", manifest.display())
            })?
        }
        (Some(manifest), None) => {
            CatalogManifest::load(manifest)
                .with_context(|| format!("failed to load manifest {}", manifest.display()))?
                .categories
        }
        (None, Some(root)) => {
            if known.is_empty() {
                println!("Usage: veridoc categories --root <DIR> requires --known <SLUGS>");
                return Ok(2);
            }
            discover(&known, &DirProbe::new(root))
        }
        (None, None) => {
            println!("Usage: veridoc categories [--manifest <FILE>] [--root <DIR> --known <SLUGS>]");
            return Ok(2);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in &categories {
            println!("{category}");
        }
    }

    if categories.is_empty() {
        tracing::warn!("no categories available");
        Ok(1)
    } else {
        Ok(0)
    }
}
