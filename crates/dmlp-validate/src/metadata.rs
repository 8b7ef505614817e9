//! # Metadata File Validation
//!
//! Parses one metadata file and checks its required fields. When `url`
//! resolves, the resolved location is stored on the returned record so
//! the caller can go on to check the data file.

use std::path::{Component, Path, PathBuf};

use dmlp_core::MetadataRecord;

use crate::issue::ValidationIssue;

/// Outcome of checking one metadata file.
#[derive(Debug, Clone)]
pub struct MetadataCheck {
    /// Findings, in check order. Empty when the file is valid.
    pub errors: Vec<ValidationIssue>,
    /// The parsed record, present whenever the JSON parsed.
    pub record: Option<MetadataRecord>,
}

impl MetadataCheck {
    fn failed(issue: ValidationIssue) -> Self {
        Self {
            errors: vec![issue],
            record: None,
        }
    }

    /// True when no findings were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Data file location found for `url`, if any.
    pub fn resolved_data_file(&self) -> Option<&Path> {
        self.record
            .as_ref()
            .and_then(|r| r.resolved_data_file.as_deref())
    }
}

/// Check the metadata file at `path`.
///
/// A read or parse failure yields exactly one finding and no record.
/// Otherwise every missing required field yields one finding, a present
/// but empty or non-array `paperUrls` yields one, and an unresolvable
/// `url` yields one naming both candidate locations.
pub fn validate_metadata_file(path: &Path, repo_root: &Path) -> MetadataCheck {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            return MetadataCheck::failed(ValidationIssue::Read {
                what: "metadata file",
                reason: e.to_string(),
            })
        }
    };

    let mut record = match MetadataRecord::from_json_str(&text) {
        Ok(record) => record,
        Err(e) => return MetadataCheck::failed(ValidationIssue::Parse(e.to_string())),
    };

    let mut errors: Vec<ValidationIssue> = record
        .missing_fields()
        .into_iter()
        .map(ValidationIssue::MissingField)
        .collect();

    if record.paper_urls.is_some() && !record.has_paper_urls() {
        errors.push(ValidationIssue::EmptyPaperUrls);
    }

    let resolution = if record.url.is_none() {
        None
    } else if let Some(url) = record.url_str() {
        Some(resolve_reference(path, url, repo_root))
    } else {
        errors.push(ValidationIssue::InvalidFieldType {
            field: "url",
            expected: "a string",
        });
        None
    };

    match resolution {
        Some(Ok(resolved)) => record.resolved_data_file = Some(resolved),
        Some(Err(issue)) => errors.push(issue),
        None => {}
    }

    tracing::debug!(
        path = %path.display(),
        findings = errors.len(),
        "checked metadata file"
    );

    MetadataCheck {
        errors,
        record: Some(record),
    }
}

/// Locate the data file referenced by `url`.
///
/// Tries the metadata file's directory first, then `repo_root`. Returns
/// the first candidate that exists, or an issue naming both.
pub fn resolve_reference(
    metadata_path: &Path,
    url: &str,
    repo_root: &Path,
) -> Result<PathBuf, ValidationIssue> {
    let metadata_dir = metadata_path.parent().unwrap_or_else(|| Path::new("."));
    let beside = normalize(&metadata_dir.join(url));
    if beside.exists() {
        return Ok(beside);
    }

    let fallback = normalize(&repo_root.join(url));
    if fallback.exists() {
        tracing::debug!(url, resolved = %fallback.display(), "resolved against repository root");
        return Ok(fallback);
    }

    Err(ValidationIssue::UnresolvedReference {
        url: url.to_string(),
        beside,
        fallback,
    })
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
