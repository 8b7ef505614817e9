//! # Validation Issues
//!
//! Every problem the validator finds is one [`ValidationIssue`]. Its
//! `Display` output is the line printed under the failing file.

use std::path::PathBuf;

use thiserror::Error;

/// Broad class of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Metadata content is not a JSON object.
    Parse,
    /// Required field missing or of the wrong shape.
    Schema,
    /// Referenced data file not found.
    Reference,
    /// Data file header or rows malformed.
    Format,
    /// File could not be read.
    Io,
}

/// A single finding, scoped to one metadata file or its data file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// The metadata file is not valid JSON, or not an object.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// A required field is absent.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// `paperUrls` is present but not a non-empty array.
    #[error("'paperUrls' must be a non-empty list of URLs")]
    EmptyPaperUrls,

    /// A present field holds a value of the wrong JSON type.
    #[error("'{field}' must be {expected}")]
    InvalidFieldType {
        /// JSON field name.
        field: &'static str,
        /// Expected shape, e.g. "a string".
        expected: &'static str,
    },

    /// Neither candidate location of `url` exists.
    #[error(
        "Referenced data file not found at '{url}' (checked {} and {})",
        .beside.display(),
        .fallback.display()
    )]
    UnresolvedReference {
        /// The `url` value as written.
        url: String,
        /// Candidate relative to the metadata file's directory.
        beside: PathBuf,
        /// Candidate relative to the repository root.
        fallback: PathBuf,
    },

    /// Metadata passed its checks but carries no resolved data file.
    #[error("could not resolve referenced data file path")]
    UnresolvedPath,

    /// The trimmed header does not start with `x`, `y`.
    #[error("data file header must start with 'x,y' but is: {0:?}")]
    HeaderMismatch(Vec<String>),

    /// A data row has fewer than two fields.
    #[error("Row {row} has fewer than 2 columns: {fields:?}")]
    ShortRow {
        /// 1-indexed row number; the header is row 1.
        row: usize,
        /// The row's fields.
        fields: Vec<String>,
    },

    /// One of the first two fields of a data row is not a number.
    #[error("Row {row} contains non-numeric value(s): {fields:?}")]
    NonNumericRow {
        /// 1-indexed row number; the header is row 1.
        row: usize,
        /// The row's fields.
        fields: Vec<String>,
    },

    /// The file could not be opened or decoded.
    #[error("Error reading {what}: {reason}")]
    Read {
        /// "metadata file" or "data file".
        what: &'static str,
        /// Underlying error text.
        reason: String,
    },
}

impl ValidationIssue {
    /// Class of this issue.
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::Parse(_) => IssueKind::Parse,
            Self::MissingField(_) | Self::EmptyPaperUrls | Self::InvalidFieldType { .. } => {
                IssueKind::Schema
            }
            Self::UnresolvedReference { .. } | Self::UnresolvedPath => IssueKind::Reference,
            Self::HeaderMismatch(_) | Self::ShortRow { .. } | Self::NonNumericRow { .. } => {
                IssueKind::Format
            }
            Self::Read { .. } => IssueKind::Io,
        }
    }

    /// Row number cited by a row-level issue.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::ShortRow { row, .. } | Self::NonNumericRow { row, .. } => Some(*row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message() {
        let issue = ValidationIssue::MissingField("id");
        assert_eq!(issue.to_string(), "Missing required field 'id'");
        assert_eq!(issue.kind(), IssueKind::Schema);
    }

    #[test]
    fn unresolved_reference_names_both_paths() {
        let issue = ValidationIssue::UnresolvedReference {
            url: "curve.csv".to_string(),
            beside: PathBuf::from("/repo/data/BC1/curve.csv"),
            fallback: PathBuf::from("/repo/curve.csv"),
        };
        let msg = issue.to_string();
        assert!(msg.contains("'curve.csv'"));
        assert!(msg.contains("/repo/data/BC1/curve.csv"));
        assert!(msg.contains("/repo/curve.csv"));
        assert_eq!(issue.kind(), IssueKind::Reference);
    }

    #[test]
    fn row_issue_cites_row_and_fields() {
        let issue = ValidationIssue::NonNumericRow {
            row: 3,
            fields: vec!["abc".to_string(), "def".to_string()],
        };
        assert_eq!(
            issue.to_string(),
            r#"Row 3 contains non-numeric value(s): ["abc", "def"]"#
        );
        assert_eq!(issue.row(), Some(3));
        assert_eq!(issue.kind(), IssueKind::Format);
    }

    #[test]
    fn header_mismatch_shows_header() {
        let issue = ValidationIssue::HeaderMismatch(vec!["y".to_string(), "x".to_string()]);
        assert_eq!(
            issue.to_string(),
            r#"data file header must start with 'x,y' but is: ["y", "x"]"#
        );
        assert_eq!(issue.row(), None);
    }

    #[test]
    fn read_issue_is_io() {
        let issue = ValidationIssue::Read {
            what: "data file",
            reason: "permission denied".to_string(),
        };
        assert_eq!(issue.to_string(), "Error reading data file: permission denied");
        assert_eq!(issue.kind(), IssueKind::Io);
    }
}
