//! # dmlp-transform — Curve File Transforms
//!
//! One-shot rewrites used while preparing curves for the dataset:
//!
//! - [`rescale_sqrt`] — replace the second column of a CSV with its square
//!   root, writing `<stem>_rescaled.<ext>` beside the input.
//! - [`convert_txt_to_csv`] / [`convert_directory`] — turn
//!   whitespace-delimited `.txt` curves (with `#` comments) into `x,y` CSV
//!   files, scaling `x` by a unit factor.
//!
//! Inputs are never modified in place.

pub mod convert;
pub mod rescale;

pub use convert::{convert_directory, convert_txt_to_csv, parse_txt_curve, DEFAULT_X_SCALE};
pub use rescale::{rescale_sqrt, rescaled_path};
