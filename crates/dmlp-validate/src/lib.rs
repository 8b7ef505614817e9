//! # dmlp-validate — Dataset Validation
//!
//! Checks that every metadata file under a data directory is well formed
//! and points at a readable `x,y` data file.
//!
//! ## Checks
//!
//! - [`validate_metadata_file`] — the JSON parses to an object, the
//!   required fields are present, `paperUrls` is a non-empty array, and
//!   `url` resolves next to the metadata file or under the repository root.
//! - [`validate_data_file`] — the header starts with `x,y` and every row
//!   has two numeric leading fields. Scanning stops at the first bad row.
//! - [`run`] — walks the tree, prints one block per failing metadata file
//!   plus a summary line, and yields the process exit code.
//!
//! ## Crate Policy
//!
//! - Findings are values ([`ValidationIssue`]), never panics or early
//!   returns out of the walk. Only a missing data directory ends a run
//!   before it starts.
//! - Read-only: nothing here writes to the dataset.

pub mod datafile;
pub mod issue;
pub mod metadata;
pub mod report;
pub mod run;

pub use datafile::validate_data_file;
pub use issue::{IssueKind, ValidationIssue};
pub use metadata::{resolve_reference, validate_metadata_file, MetadataCheck};
pub use report::{FileReport, FileStage, ValidationReport};
pub use run::{
    find_metadata_files, run, RunOutcome, EXIT_MISSING_DATA_DIR, EXIT_OK,
    EXIT_VALIDATION_FAILED,
};
