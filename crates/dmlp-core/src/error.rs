//! # Error Types
//!
//! Errors raised by the file transforms and configuration loading. All use
//! `thiserror`. Validation findings are not errors: the validator collects
//! them as values (see `dmlp_validate::ValidationIssue`).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the dataset tooling.
#[derive(Error, Debug)]
pub enum DmlpError {
    /// A CSV file has fewer than the two columns a curve needs.
    #[error("{path}: file must have at least two columns, found {found}")]
    TooFewColumns {
        /// File that was read.
        path: PathBuf,
        /// Number of header columns present.
        found: usize,
    },

    /// A cell that must hold a number does not parse as one.
    #[error("{path}: row {row}, column '{column}': '{value}' is not a number")]
    NonNumeric {
        /// File that was read.
        path: PathBuf,
        /// 1-indexed row (the header is row 1) or line number.
        row: usize,
        /// Column name.
        column: String,
        /// The offending raw text.
        value: String,
    },

    /// A whitespace-delimited text line holds fewer than two fields.
    #[error("{path}: line {line} has fewer than two fields: '{content}'")]
    ShortLine {
        /// File that was read.
        path: PathBuf,
        /// 1-indexed line number.
        line: usize,
        /// The offending line, comment stripped.
        content: String,
    },

    /// The input path has no file stem to derive an output name from.
    #[error("cannot derive an output file name from '{0}'")]
    InvalidPath(PathBuf),

    /// Configuration value is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// CSV reading or writing failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
