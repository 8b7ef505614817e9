//! # Validation Report
//!
//! Findings grouped by metadata file, in the order files were visited.
//! Rendering writes the console format:
//!
//! ```text
//! [ERROR] data/BC1/a.json: metadata errors:
//!   - Missing required field 'id'
//! [ERROR] data/BC1/b.json: problems in data file data/BC1/b.csv:
//!   - Row 3 contains non-numeric value(s): ["abc", "def"]
//!
//! Validation failed: 2 problem(s) found.
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dmlp_core::DataRootConfig;

use crate::issue::ValidationIssue;

/// Where in the per-file pipeline the findings arose.
#[derive(Debug, Clone, PartialEq)]
pub enum FileStage {
    /// The metadata file itself.
    Metadata,
    /// Metadata passed but no data file location was recorded.
    Unresolved,
    /// The referenced data file.
    DataFile(PathBuf),
}

/// Findings for one failing metadata file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// The metadata file the findings belong to.
    pub metadata_file: PathBuf,
    /// Stage that failed.
    pub stage: FileStage,
    /// Findings, in check order. Never empty.
    pub issues: Vec<ValidationIssue>,
}

impl FileReport {
    /// Write this entry as a console block.
    pub fn render<W: Write>(&self, config: &DataRootConfig, out: &mut W) -> io::Result<()> {
        let meta = config.display_path(&self.metadata_file);
        match &self.stage {
            FileStage::Metadata => writeln!(out, "[ERROR] {meta}: metadata errors:")?,
            FileStage::Unresolved => {
                // The single issue is the headline itself.
                return writeln!(out, "[ERROR] {meta}: {}", ValidationIssue::UnresolvedPath);
            }
            FileStage::DataFile(data_file) => writeln!(
                out,
                "[ERROR] {meta}: problems in data file {}:",
                config.display_path(data_file)
            )?,
        }
        for issue in &self.issues {
            writeln!(out, "  - {issue}")?;
        }
        Ok(())
    }
}

/// Aggregate result of one validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    files: Vec<FileReport>,
    checked: usize,
}

impl ValidationReport {
    /// Start an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that a metadata file was visited.
    pub fn mark_checked(&mut self) {
        self.checked += 1;
    }

    /// Record findings for a metadata file. Empty `issues` are ignored.
    /// Returns the stored entry when one was added.
    pub fn record(
        &mut self,
        metadata_file: &Path,
        stage: FileStage,
        issues: Vec<ValidationIssue>,
    ) -> Option<&FileReport> {
        if issues.is_empty() {
            return None;
        }
        self.files.push(FileReport {
            metadata_file: metadata_file.to_path_buf(),
            stage,
            issues,
        });
        self.files.last()
    }

    /// Failing files, in visit order.
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// Findings recorded for one metadata file.
    pub fn issues_for(&self, metadata_file: &Path) -> Option<&[ValidationIssue]> {
        self.files
            .iter()
            .find(|f| f.metadata_file == metadata_file)
            .map(|f| f.issues.as_slice())
    }

    /// Number of metadata files visited.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Number of metadata files with at least one finding.
    pub fn failing_files(&self) -> usize {
        self.files.len()
    }

    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.files.is_empty()
    }

    /// Write the closing summary line.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_success() {
            writeln!(
                out,
                "Validation passed: all metadata files and referenced data files look OK."
            )
        } else {
            writeln!(out)?;
            writeln!(
                out,
                "Validation failed: {} problem(s) found.",
                self.failing_files()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DataRootConfig {
        DataRootConfig::new("/repo/data", "/repo")
    }

    fn rendered(report: &FileReport) -> String {
        let mut buf = Vec::new();
        report.render(&config(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_issue_list_is_not_recorded() {
        let mut report = ValidationReport::new();
        assert!(report
            .record(Path::new("/repo/data/a.json"), FileStage::Metadata, vec![])
            .is_none());
        assert!(report.is_success());
    }

    #[test]
    fn metadata_block_lists_each_issue() {
        let entry = FileReport {
            metadata_file: PathBuf::from("/repo/data/a.json"),
            stage: FileStage::Metadata,
            issues: vec![
                ValidationIssue::MissingField("id"),
                ValidationIssue::MissingField("url"),
            ],
        };
        let expected = format!(
            "[ERROR] {}: metadata errors:\n  - Missing required field 'id'\n  - Missing required field 'url'\n",
            Path::new("data/a.json").display()
        );
        assert_eq!(rendered(&entry), expected);
    }

    #[test]
    fn unresolved_block_is_single_line() {
        let entry = FileReport {
            metadata_file: PathBuf::from("/repo/data/a.json"),
            stage: FileStage::Unresolved,
            issues: vec![ValidationIssue::UnresolvedPath],
        };
        let text = rendered(&entry);
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with(": could not resolve referenced data file path\n"));
    }

    #[test]
    fn data_file_block_names_data_file() {
        let entry = FileReport {
            metadata_file: PathBuf::from("/repo/data/a.json"),
            stage: FileStage::DataFile(PathBuf::from("/repo/data/a.csv")),
            issues: vec![ValidationIssue::HeaderMismatch(vec!["y".into(), "x".into()])],
        };
        let text = rendered(&entry);
        assert!(text.contains(&format!(
            "problems in data file {}:",
            Path::new("data/a.csv").display()
        )));
        assert!(text.contains("  - data file header must start with 'x,y'"));
    }

    #[test]
    fn summary_counts_failing_files() {
        let mut report = ValidationReport::new();
        report.mark_checked();
        report.mark_checked();
        report.record(
            Path::new("/repo/data/a.json"),
            FileStage::Metadata,
            vec![ValidationIssue::MissingField("id"), ValidationIssue::EmptyPaperUrls],
        );
        assert_eq!(report.checked(), 2);
        assert_eq!(report.failing_files(), 1);
        assert_eq!(
            report.issues_for(Path::new("/repo/data/a.json")).map(<[_]>::len),
            Some(2)
        );

        let mut buf = Vec::new();
        report.write_summary(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\nValidation failed: 1 problem(s) found.\n"
        );
    }

    #[test]
    fn summary_on_success() {
        let report = ValidationReport::new();
        let mut buf = Vec::new();
        report.write_summary(&mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("Validation passed"));
    }
}
