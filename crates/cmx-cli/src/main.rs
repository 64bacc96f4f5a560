//! # cmx CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps to a tracing `EnvFilter` so
//! `-v` surfaces the engines' diagnostics (state-resolver fallbacks,
//! provisional-homoclave notices).

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmx_cli::generate::{run_generate, GenerateArgs};
use cmx_cli::validate::{run_validate, ValidateArgs};

/// cmx — Mexican official identifier toolchain
///
/// Validation and generation for RFC (tax ID), CURP (population registry
/// code), CLABE (interbank account number), and NSS (social security
/// number).
#[derive(Parser, Debug)]
#[command(name = "cmx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifier candidates (single or batch file).
    Validate(ValidateArgs),

    /// Generate best-effort identifiers from structured fields.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

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
        Commands::Validate(args) => run_validate(&args),
        Commands::Generate(args) => run_generate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
