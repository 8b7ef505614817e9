//! # Data File Validation
//!
//! A data file is comma-delimited text whose header starts with `x,y`,
//! followed by rows whose first two fields are numbers. Extra columns are
//! allowed and not inspected.
//!
//! Scanning stops at the first malformed row, so a call returns at most
//! one structural finding. A header mismatch also ends the scan: rows
//! under a wrong header are not judged.
//!
//! Rows are numbered by physical record, header first, so a blank line is
//! a row with no fields and fails the two-column check.

use std::path::Path;

use csv::ReaderBuilder;

use crate::issue::ValidationIssue;

/// Leading header fields every data file must carry.
const EXPECTED_HEADER: [&str; 2] = ["x", "y"];

/// Check the data file at `path`. Returns an empty vector when it is valid.
pub fn validate_data_file(path: &Path) -> Vec<ValidationIssue> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => return vec![read_issue(e.to_string())],
    };

    let mut records = RawRecords::new(&text);

    let header: Vec<String> = match records.next().map(|raw| split_fields(&raw)) {
        Some(Ok(fields)) => fields.iter().map(|h| h.trim().to_string()).collect(),
        Some(Err(e)) => return vec![read_issue(e.to_string())],
        None => return vec![read_issue("file is empty".to_string())],
    };

    if header.len() < EXPECTED_HEADER.len()
        || header[..EXPECTED_HEADER.len()] != EXPECTED_HEADER
    {
        return vec![ValidationIssue::HeaderMismatch(header)];
    }

    let mut rows_checked = 0usize;
    for (row, raw) in (2usize..).zip(records) {
        let fields = match split_fields(&raw) {
            Ok(fields) => fields,
            Err(e) => return vec![read_issue(e.to_string())],
        };
        if let Some(issue) = check_row(row, fields) {
            tracing::debug!(path = %path.display(), row, "data file scan stopped");
            return vec![issue];
        }
        rows_checked += 1;
    }

    tracing::debug!(path = %path.display(), rows = rows_checked, "data file ok");
    Vec::new()
}

/// Raw text of each record, one per line. A line that leaves a quoted
/// field open is joined with the lines that follow until the quote closes.
struct RawRecords<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> RawRecords<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }
}

impl Iterator for RawRecords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut record = self.lines.next()?.to_string();
        while record.matches('"').count() % 2 == 1 {
            let Some(line) = self.lines.next() else {
                break;
            };
            record.push('\n');
            record.push_str(line);
        }
        Some(record)
    }
}

/// Split one raw record into fields. An empty record has no fields.
fn split_fields(raw: &str) -> Result<Vec<String>, csv::Error> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());
    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

fn check_row(row: usize, fields: Vec<String>) -> Option<ValidationIssue> {
    if fields.len() < 2 {
        return Some(ValidationIssue::ShortRow { row, fields });
    }
    let numeric = fields.iter().take(2).all(|f| f.trim().parse::<f64>().is_ok());
    if !numeric {
        return Some(ValidationIssue::NonNumericRow { row, fields });
    }
    None
}

fn read_issue(reason: String) -> ValidationIssue {
    ValidationIssue::Read {
        what: "data file",
        reason,
    }
}
