//! # dmlp-core — Foundational Types for the Limit-Curve Dataset
//!
//! The dataset is a tree of metadata files (`*.json`), each describing one
//! labeled x/y curve and pointing at a comma-delimited data file with an
//! `x,y` header. This crate defines the types every other crate shares.
//!
//! ## Contents
//!
//! - [`MetadataRecord`] — one parsed metadata file, with the four required
//!   fields and any extra fields kept verbatim.
//! - [`DataRootConfig`] — where the data tree lives and which directory
//!   relative `url`s fall back to. Passed explicitly; nothing here locates
//!   itself on disk.
//! - [`CurveTable`] — a header plus raw string rows, read and written with
//!   the `csv` crate, used by the transforms.
//! - [`format_number`] — float rendering shared by every writer.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dmlp-*` crates.
//! - No `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod metadata;
pub mod table;

pub use config::DataRootConfig;
pub use error::DmlpError;
pub use metadata::{MetadataRecord, REQUIRED_FIELDS};
pub use table::{format_number, CurveTable};
