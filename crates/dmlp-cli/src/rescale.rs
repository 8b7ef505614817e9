//! # Rescale Subcommand
//!
//! `dmlp rescale <FILE>` writes `<stem>_rescaled.<ext>` with the second
//! column replaced by its square root.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the rescale subcommand.
#[derive(Args, Debug)]
pub struct RescaleArgs {
    /// CSV file whose second column is rescaled.
    pub file: PathBuf,
}

/// Execute the rescale subcommand.
pub fn run_rescale(args: &RescaleArgs) -> Result<u8> {
    let output = dmlp_transform::rescale_sqrt(&args.file)
        .with_context(|| format!("failed to rescale {}", args.file.display()))?;
    println!("Rescaled file saved as '{}'", output.display());
    Ok(0)
}
