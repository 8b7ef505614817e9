//! # Text-to-CSV Conversion
//!
//! Curves digitized from papers often arrive as whitespace-delimited text:
//!
//! ```text
//! # mass [eV]    coupling
//! 1.0e6   3.2e-10
//! 2.0e6   2.9e-10   # interpolated
//! ```
//!
//! Conversion drops comments and blank lines, keeps the first two fields
//! of each line, multiplies `x` by a unit factor, and writes an `x,y` CSV
//! beside the input.

use std::path::{Path, PathBuf};

use dmlp_core::{CurveTable, DmlpError};

/// Default `x` factor: eV to GeV.
pub const DEFAULT_X_SCALE: f64 = 1e-9;

const COMMENT_CHAR: char = '#';

/// Parse a whitespace-delimited curve into `(x, y)` points, unscaled.
///
/// # Errors
///
/// `ShortLine` for a data line with fewer than two fields, `NonNumeric`
/// for a field that is not a number, `Io` when the file cannot be read.
pub fn parse_txt_curve(path: &Path) -> Result<Vec<(f64, f64)>, DmlpError> {
    let text = std::fs::read_to_string(path)?;
    let mut points = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let content = line.split(COMMENT_CHAR).next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(DmlpError::ShortLine {
                path: path.to_path_buf(),
                line: line_no,
                content: content.to_string(),
            });
        }

        let parse = |raw: &str, column: &str| {
            raw.parse::<f64>().map_err(|_| DmlpError::NonNumeric {
                path: path.to_path_buf(),
                row: line_no,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };
        points.push((parse(fields[0], "x")?, parse(fields[1], "y")?));
    }

    Ok(points)
}

/// Convert one text curve to `<stem>.csv`, scaling `x` by `x_scale`.
/// Returns the path written.
pub fn convert_txt_to_csv(input: &Path, x_scale: f64) -> Result<PathBuf, DmlpError> {
    let output = input.with_extension("csv");
    if output == input || input.file_stem().is_none() {
        return Err(DmlpError::InvalidPath(input.to_path_buf()));
    }

    let points: Vec<(f64, f64)> = parse_txt_curve(input)?
        .into_iter()
        .map(|(x, y)| (x * x_scale, y))
        .collect();

    CurveTable::from_points(&points).write(&output)?;
    tracing::info!(output = %output.display(), points = points.len(), "wrote csv");
    Ok(output)
}

/// Convert every `*.txt` file directly inside `dir`, in name order.
///
/// Stops at the first file that fails; files converted before it stay
/// written.
pub fn convert_directory(dir: &Path, x_scale: f64) -> Result<Vec<PathBuf>, DmlpError> {
    let mut inputs: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_txt(path))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .txt files to convert");
    }

    inputs
        .iter()
        .map(|input| convert_txt_to_csv(input, x_scale))
        .collect()
}

fn is_txt(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}
