//! # Curve Tables
//!
//! A [`CurveTable`] is a CSV file held as a header row plus raw string
//! cells. Transforms rewrite single columns and copy everything else
//! through untouched, so cells stay as text until a caller parses them.

use std::path::Path;

use crate::error::DmlpError;

/// A header plus rows of raw cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveTable {
    /// Column names, as written in the file.
    pub headers: Vec<String>,
    /// Data rows. Every row has `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl CurveTable {
    /// Build a two-column `x,y` table from numeric points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self {
            headers: vec!["x".to_string(), "y".to_string()],
            rows: points
                .iter()
                .map(|&(x, y)| vec![format_number(x), format_number(y)])
                .collect(),
        }
    }

    /// Read a CSV file whose first row is a header.
    pub fn read(path: &Path) -> Result<Self, DmlpError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Write the table as CSV, header first.
    pub fn write(&self, path: &Path) -> Result<(), DmlpError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render a float the way the dataset files write them: shortest
/// round-trip digits, exponent form below `1e-4` and from `1e16` up.
/// Exponents carry a sign and at least two digits (`1e-09`, `1e+16`).
/// NaN renders as an empty cell.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let s = value.to_string();
        if s.contains('.') {
            s
        } else {
            format!("{s}.0")
        }
    } else {
        pad_exponent(format!("{value:e}"))
    }
}

/// `1e-9` → `1e-09`, `1e16` → `1e+16`.
fn pad_exponent(raw: String) -> String {
    if let Some((mantissa, exp)) = raw.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
    }
    raw
}
