//! # Convert Subcommand
//!
//! `dmlp convert <PATH>...` converts whitespace-delimited text curves to
//! `x,y` CSV. A directory argument converts every `.txt` file directly
//! inside it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dmlp_transform::DEFAULT_X_SCALE;

/// Arguments for the convert subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Text files or directories of text files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Factor applied to every x value.
    #[arg(long, default_value_t = DEFAULT_X_SCALE)]
    pub x_scale: f64,
}

/// Execute the convert subcommand.
pub fn run_convert(args: &ConvertArgs) -> Result<u8> {
    for path in &args.paths {
        let converted = if path.is_dir() {
            dmlp_transform::convert_directory(path, args.x_scale)
        } else {
            dmlp_transform::convert_txt_to_csv(path, args.x_scale).map(|out| vec![out])
        };
        let outputs =
            converted.with_context(|| format!("failed to convert {}", path.display()))?;

        for output in outputs {
            println!("Wrote {}", output.display());
        }
    }
    Ok(0)
}
