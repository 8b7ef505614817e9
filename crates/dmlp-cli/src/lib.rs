//! # dmlp-cli — CLI Tool for the Limit-Curve Dataset
//!
//! Provides the `dmlp` command-line interface.
//!
//! ## Subcommands
//!
//! - `dmlp validate` — walk the data tree and check every metadata file
//!   and the data file it references.
//! - `dmlp rescale` — square-root rescale the second column of a CSV.
//! - `dmlp convert` — convert whitespace-delimited `.txt` curves to CSV.
//!
//! ```bash
//! dmlp validate
//! dmlp validate --data-dir site/data --repo-root site
//! dmlp rescale data/BC1/_NotRescaled/limit.csv
//! dmlp convert AxionLimits/Projections --x-scale 1e-9
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; checks and transforms live in the
//!   domain crates.
//! - Handlers return `anyhow::Result<u8>`: the `u8` is the exit code.

pub mod convert;
pub mod rescale;
pub mod validate;
