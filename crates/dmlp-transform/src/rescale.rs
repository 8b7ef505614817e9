//! # Square-Root Rescaling
//!
//! Some published limits are quoted in squared units. Rescaling takes the
//! square root of the second column and leaves every other column as
//! written.

use std::path::{Path, PathBuf};

use dmlp_core::{format_number, CurveTable, DmlpError};

/// Suffix appended to the file stem of rescaled outputs.
const RESCALED_SUFFIX: &str = "_rescaled";

/// Rescale the second column of the CSV at `input` by square root.
///
/// Empty cells stay empty. Negative values have no real root and are
/// written as empty cells. Returns the path written.
///
/// # Errors
///
/// `TooFewColumns` when the header has fewer than two columns,
/// `NonNumeric` when a second-column cell is not a number, and CSV or IO
/// errors from reading or writing.
pub fn rescale_sqrt(input: &Path) -> Result<PathBuf, DmlpError> {
    let mut table = CurveTable::read(input)?;
    if table.width() < 2 {
        return Err(DmlpError::TooFewColumns {
            path: input.to_path_buf(),
            found: table.width(),
        });
    }

    let column = table.headers[1].clone();
    for (index, row) in table.rows.iter_mut().enumerate() {
        let raw = row[1].trim();
        if raw.is_empty() {
            continue;
        }
        let value: f64 = raw.parse().map_err(|_| DmlpError::NonNumeric {
            path: input.to_path_buf(),
            row: index + 2,
            column: column.clone(),
            value: raw.to_string(),
        })?;
        row[1] = format_number(value.sqrt());
    }

    let output = rescaled_path(input)?;
    table.write(&output)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rows = table.len(),
        "rescaled column '{column}'"
    );
    Ok(output)
}

/// `<dir>/<stem>_rescaled.<ext>` for `input`.
pub fn rescaled_path(input: &Path) -> Result<PathBuf, DmlpError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| DmlpError::InvalidPath(input.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(RESCALED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(input.with_file_name(name))
}
