//! # veridoc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use veridoc_cli::categories::{run_categories, CategoriesArgs};
use veridoc_cli::check::{run_check, CheckArgs};
use veridoc_cli::resolve::{run_resolve, ResolveArgs};

/// Veridoc — document validation registry toolchain.
///
/// Resolves validation identifiers against a document registry, lists
/// validation-type categories, and checks registry files before
/// deployment.
#[derive(Parser, Debug)]
#[command(name = "veridoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a validation id to its terminal state.
    Resolve(ResolveArgs),

    /// List validation-type categories from a manifest or by discovery.
    Categories(CategoriesArgs),

    /// Schema-validate and audit a registry file.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(&args),
        Commands::Categories(args) => run_categories(&args),
        Commands::Check(args) => run_check(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
