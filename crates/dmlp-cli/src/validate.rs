//! # Validate Subcommand
//!
//! Runs the full tree walk. With no flags the data directory comes from
//! `DMLP_DATA_DIR` (default `data`) and the repository root from
//! `DMLP_REPO_ROOT` (default: parent of the data directory).
//!
//! Exit codes: 0 all files valid, 2 data directory missing, 3 at least
//! one failing metadata file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dmlp_core::DataRootConfig;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory searched recursively for metadata files.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Fallback base for data file references.
    #[arg(long)]
    pub repo_root: Option<PathBuf>,
}

impl ValidateArgs {
    /// Environment configuration with flags applied on top.
    pub fn config(&self) -> Result<DataRootConfig> {
        let mut config = match &self.data_dir {
            // An explicit data dir also moves the default repo root.
            Some(dir) => DataRootConfig::for_data_dir(dir),
            None => DataRootConfig::from_env().context("loading data-root configuration")?,
        };
        if let Some(root) = &self.repo_root {
            config = config.with_repo_root(root);
        }
        Ok(config)
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let config = args.config()?;
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        repo_root = %config.repo_root.display(),
        "validate configuration"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = dmlp_validate::run(&config, &mut out).context("writing validation report")?;
    out.flush().context("flushing validation report")?;
    Ok(outcome.exit_code())
}
