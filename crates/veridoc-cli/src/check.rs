//! # Check Subcommand
//!
//! The publisher-side gate for a registry file: JSON Schema validation of
//! the raw document, then the record audit. Resolution tolerates the
//! defects this command reports; deployments should not.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use veridoc_registry::{validate_registry_value, Registry, RegistryError};

/// Arguments for the `veridoc check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the registry JSON file.
    #[arg(long, value_name = "FILE")]
    pub registry: PathBuf,

    /// Skip JSON Schema validation; run only the record audit.
    #[arg(long)]
    pub no_schema: bool,
}

/// Execute the check subcommand.
///
/// Exit code: 0 when the registry is clean, 1 when the schema or the
/// audit found anything.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let content = std::fs::read_to_string(&args.registry)
        .with_context(|| format!("failed to read registry {}", args.registry.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("registry {} is not valid JSON", args.registry.display()))?;

    let mut had_failures = false;

    if !args.no_schema {
        match validate_registry_value(&value) {
            Ok(()) => println!("Schema: OK"),
            Err(RegistryError::SchemaValidation { violations }) => {
                println!("Schema: {} violation(s)", violations.len());
                for violation in violations.iter() {
                    println!("  FAIL: {violation}");
                }
                had_failures = true;
            }
            Err(other) => return Err(other.into()),
        }
    }

    match Registry::from_value(value) {
        Ok(registry) => {
            let report = registry.audit();
            println!("Records: {}/{} passed", report.passed, report.total);
            for finding in &report.findings {
                println!("  FAIL: {finding}");
            }
            had_failures |= !report.is_clean();
        }
        Err(e @ (RegistryError::NotAnArray { .. } | RegistryError::RecordShape { .. })) => {
            // Structurally unloadable; the audit has nothing to walk.
            println!("Records: unloadable");
            println!("  FAIL: {e}");
            had_failures = true;
        }
        Err(other) => return Err(other.into()),
    }

    if had_failures {
        Ok(1)
    } else {
        Ok(0)
    }
}
