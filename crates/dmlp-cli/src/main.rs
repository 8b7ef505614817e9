//! # dmlp CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dmlp_cli::convert::{run_convert, ConvertArgs};
use dmlp_cli::rescale::{run_rescale, RescaleArgs};
use dmlp_cli::validate::{run_validate, ValidateArgs};

/// Limit-curve dataset toolchain.
///
/// Validates metadata files and the x/y data files they reference, and
/// prepares new curves for the dataset.
#[derive(Parser, Debug)]
#[command(name = "dmlp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every metadata file and its referenced data file.
    Validate(ValidateArgs),

    /// Square-root rescale the second column of a CSV file.
    Rescale(RescaleArgs),

    /// Convert whitespace-delimited text curves to x,y CSV.
    Convert(ConvertArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("dmlp CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args),
        Commands::Rescale(args) => run_rescale(args),
        Commands::Convert(args) => run_convert(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
