//! # Tree Walk
//!
//! Visits every metadata file under the data directory, checks it and its
//! data file, prints a block per failing file and a closing summary.
//!
//! Directory entries are visited in sorted order so two runs over the same
//! tree print the same text. Callers should rely only on every metadata
//! file being visited exactly once.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dmlp_core::DataRootConfig;

use crate::datafile::validate_data_file;
use crate::issue::ValidationIssue;
use crate::metadata::validate_metadata_file;
use crate::report::{FileStage, ValidationReport};

/// Every check passed.
pub const EXIT_OK: u8 = 0;
/// The data directory does not exist.
pub const EXIT_MISSING_DATA_DIR: u8 = 2;
/// At least one metadata file failed.
pub const EXIT_VALIDATION_FAILED: u8 = 3;

/// Extension of metadata files, compared ASCII case-insensitively.
const METADATA_EXTENSION: &str = ".json";

/// Result of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Nothing was checked: the data directory is missing.
    MissingDataDir(PathBuf),
    /// The walk finished.
    Completed(ValidationReport),
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingDataDir(_) => EXIT_MISSING_DATA_DIR,
            Self::Completed(report) if report.is_success() => EXIT_OK,
            Self::Completed(_) => EXIT_VALIDATION_FAILED,
        }
    }

    /// The report, when the walk ran.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::MissingDataDir(_) => None,
            Self::Completed(report) => Some(report),
        }
    }
}

/// Validate the whole data tree named by `config`, writing the console
/// report to `out`.
///
/// # Errors
///
/// Returns an IO error only when writing to `out` fails or the data
/// directory itself cannot be listed. Problems with individual files are
/// findings in the report.
pub fn run<W: Write>(config: &DataRootConfig, out: &mut W) -> io::Result<RunOutcome> {
    if !config.data_dir.is_dir() {
        writeln!(out, "Data directory not found at {}", config.data_dir.display())?;
        return Ok(RunOutcome::MissingDataDir(config.data_dir.clone()));
    }

    let metadata_files = find_metadata_files(&config.data_dir)?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        count = metadata_files.len(),
        "validating metadata files"
    );

    let mut report = ValidationReport::new();
    for metadata_file in &metadata_files {
        report.mark_checked();

        let check = validate_metadata_file(metadata_file, &config.repo_root);
        if !check.is_valid() {
            if let Some(entry) = report.record(metadata_file, FileStage::Metadata, check.errors) {
                entry.render(config, out)?;
            }
            continue;
        }

        let Some(data_file) = check.resolved_data_file().map(Path::to_path_buf) else {
            if let Some(entry) = report.record(
                metadata_file,
                FileStage::Unresolved,
                vec![ValidationIssue::UnresolvedPath],
            ) {
                entry.render(config, out)?;
            }
            continue;
        };

        let issues = validate_data_file(&data_file);
        if let Some(entry) = report.record(metadata_file, FileStage::DataFile(data_file), issues) {
            entry.render(config, out)?;
        }
    }

    report.write_summary(out)?;
    tracing::info!(
        checked = report.checked(),
        failing = report.failing_files(),
        "validation finished"
    );
    Ok(RunOutcome::Completed(report))
}

/// All metadata files under `dir`, recursively, in sorted visit order.
///
/// Subdirectories that cannot be listed are skipped with a warning; only
/// failure to list `dir` itself is an error. An entry whose type cannot be
/// read is logged and still considered as a file, so a metadata file never
/// drops out of the walk unannounced.
pub fn find_metadata_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_into(dir, &mut found)?;
    Ok(found)
}

fn collect_into(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
            }
        }
    }
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let is_dir = match entry.file_type() {
            Ok(file_type) => file_type.is_dir(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read file type");
                false
            }
        };
        if is_dir {
            if let Err(e) = collect_into(&path, found) {
                tracing::warn!(dir = %path.display(), error = %e, "skipping unreadable directory");
            }
        } else if is_metadata_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_metadata_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(METADATA_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_extension_is_case_insensitive() {
        assert!(is_metadata_file(Path::new("a/b.json")));
        assert!(is_metadata_file(Path::new("a/b.JSON")));
        assert!(is_metadata_file(Path::new("a/b.Json")));
        assert!(!is_metadata_file(Path::new("a/b.csv")));
        assert!(!is_metadata_file(Path::new("a/b.json.bak")));
    }

    #[test]
    fn finds_nested_files_once() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("b/deep")).unwrap();
        std::fs::create_dir_all(root.join("a")).unwrap();
        for rel in ["top.json", "a/one.JSON", "b/deep/two.json", "b/deep/two.csv"] {
            std::fs::write(root.join(rel), "{}").unwrap();
        }

        let mut found = find_metadata_files(root).unwrap();
        found.sort();
        let mut expected = vec![
            root.join("top.json"),
            root.join("a/one.JSON"),
            root.join("b/deep/two.json"),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_metadata_link_is_still_checked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::os::unix::fs::symlink(root.join("gone.json"), root.join("broken.json")).unwrap();

        assert_eq!(find_metadata_files(root).unwrap(), vec![root.join("broken.json")]);

        let config = DataRootConfig::for_data_dir(root);
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        assert_eq!(outcome.exit_code(), EXIT_VALIDATION_FAILED);
        let report = outcome.report().unwrap();
        assert_eq!(report.checked(), 1);
        assert_eq!(report.failing_files(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_does_not_abort_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let locked = root.join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::write(locked.join("hidden.json"), "{}").unwrap();
        std::fs::write(root.join("open.json"), "{}").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let found = find_metadata_files(root);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = found.unwrap();
        assert!(found.contains(&root.join("open.json")));
    }

    #[test]
    fn missing_data_dir_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataRootConfig::for_data_dir(dir.path().join("nope"));
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        assert_eq!(outcome.exit_code(), EXIT_MISSING_DATA_DIR);
        assert!(outcome.report().is_none());
        assert!(String::from_utf8(out).unwrap().starts_with("Data directory not found at "));
    }

    #[test]
    fn empty_data_dir_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataRootConfig::for_data_dir(dir.path());
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        assert_eq!(outcome.exit_code(), EXIT_OK);
        assert_eq!(outcome.report().map(ValidationReport::checked), Some(0));
    }
}
