//! # Resolve Subcommand
//!
//! Loads a registry file and resolves one validation id to its terminal
//! state, printed as a human-readable report or as tagged JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use veridoc_registry::{DocumentRecord, Registry, Resolution};

/// Arguments for the `veridoc resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the registry JSON file.
    #[arg(long, value_name = "FILE")]
    pub registry: PathBuf,

    /// Validation id to resolve. Omit to exercise the no-id state.
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Emit the resolution as JSON instead of a human-readable report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the resolve subcommand.
///
/// Exit code: 0 for `Latest`, 1 for `Outdated`, 2 for `NotFound` and
/// `NoId`.
pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let registry = Registry::from_path(&args.registry)
        .with_context(|| format!("failed to load registry {}", args.registry.display()))?;

    tracing::info!(record_count = registry.len(), "registry loaded");

    let resolution = registry.resolve(args.id.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print_resolution(&resolution);
    }

    Ok(exit_code(&resolution))
}

fn exit_code(resolution: &Resolution<'_>) -> u8 {
    match resolution {
        Resolution::Latest { .. } => 0,
        Resolution::Outdated { .. } => 1,
        Resolution::NotFound | Resolution::NoId => 2,
    }
}

fn print_resolution(resolution: &Resolution<'_>) {
    match resolution {
        Resolution::NoId => {
            println!("NO_ID: no validation id supplied");
        }
        Resolution::NotFound => {
            println!("NOT_FOUND: no record carries this validation id");
        }
        Resolution::Latest { record } => {
            println!(
                "LATEST: {} v{} is the newest version of its document",
                record.document_name, record.version
            );
            print_record("record", record);
        }
        Resolution::Outdated { record, latest } => {
            println!(
                "OUTDATED: {} v{} is superseded by v{}",
                record.document_name, record.version, latest.version
            );
            print_record("record", record);
            print_record("latest", latest);
        }
    }
}

fn print_record(role: &str, record: &DocumentRecord) {
    println!(
        "  {role}: {} — {} v{} ({})",
        record.validation_id, record.document_name, record.version, record.date
    );
    if let Some(url) = &record.url {
        println!("    url: {url}");
    }
    if let Some(contact) = &record.contact {
        println!("    contact: {contact}");
    }
}
