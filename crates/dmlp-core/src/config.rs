//! Data-root configuration.
//!
//! Names the directory the validator walks and the directory that
//! metadata `url`s fall back to when they do not resolve next to the
//! metadata file. Defaults come from the environment; explicit values
//! (CLI flags, tests) override them.

use std::path::{Path, PathBuf};

use crate::error::DmlpError;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "DMLP_DATA_DIR";
/// Environment variable naming the repository root.
pub const REPO_ROOT_ENV: &str = "DMLP_REPO_ROOT";
/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRootConfig {
    /// Directory tree searched for metadata files.
    pub data_dir: PathBuf,
    /// Fallback base for `url` resolution and base for displayed paths.
    pub repo_root: PathBuf,
}

impl DataRootConfig {
    /// Build a configuration from explicit paths.
    pub fn new(data_dir: impl Into<PathBuf>, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            repo_root: repo_root.into(),
        }
    }

    /// Use `data_dir` and take its parent as the repository root.
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let repo_root = default_repo_root(&data_dir);
        Self { data_dir, repo_root }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `DMLP_DATA_DIR` (default: `data`)
    /// - `DMLP_REPO_ROOT` (default: parent of the data directory)
    pub fn from_env() -> Result<Self, DmlpError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DmlpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_ENV) {
            Some(v) if v.trim().is_empty() => {
                return Err(DmlpError::Config(format!("{DATA_DIR_ENV} is set but empty")))
            }
            Some(v) => PathBuf::from(v),
            None => PathBuf::from(DEFAULT_DATA_DIR),
        };
        let repo_root = match lookup(REPO_ROOT_ENV) {
            Some(v) if v.trim().is_empty() => {
                return Err(DmlpError::Config(format!("{REPO_ROOT_ENV} is set but empty")))
            }
            Some(v) => PathBuf::from(v),
            None => default_repo_root(&data_dir),
        };
        Ok(Self { data_dir, repo_root })
    }

    /// Replace the data directory, keeping the repository root.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Replace the repository root.
    pub fn with_repo_root(mut self, repo_root: impl Into<PathBuf>) -> Self {
        self.repo_root = repo_root.into();
        self
    }

    /// Render `path` relative to the repository root when it lies inside it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.repo_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn default_repo_root(data_dir: &Path) -> PathBuf {
    match data_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = DataRootConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.repo_root, PathBuf::from("."));
    }

    #[test]
    fn repo_root_defaults_to_parent_of_data_dir() {
        let cfg = DataRootConfig::from_lookup(lookup_from(&[(DATA_DIR_ENV, "/srv/site/data")]))
            .unwrap();
        assert_eq!(cfg.repo_root, PathBuf::from("/srv/site"));
    }

    #[test]
    fn explicit_repo_root_wins() {
        let cfg = DataRootConfig::from_lookup(lookup_from(&[
            (DATA_DIR_ENV, "/srv/site/data"),
            (REPO_ROOT_ENV, "/srv/other"),
        ]))
        .unwrap();
        assert_eq!(cfg.repo_root, PathBuf::from("/srv/other"));
    }

    #[test]
    fn empty_variable_is_rejected() {
        let err = DataRootConfig::from_lookup(lookup_from(&[(DATA_DIR_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, DmlpError::Config(_)));
    }

    #[test]
    fn builders_override_fields() {
        let cfg = DataRootConfig::for_data_dir("a/data")
            .with_data_dir("b/data")
            .with_repo_root("c");
        assert_eq!(cfg, DataRootConfig::new("b/data", "c"));
    }

    #[test]
    fn display_path_strips_repo_root() {
        let cfg = DataRootConfig::new("/repo/data", "/repo");
        assert_eq!(
            cfg.display_path(Path::new("/repo/data/BC1/a.json")),
            Path::new("data/BC1/a.json").display().to_string()
        );
        assert_eq!(
            cfg.display_path(Path::new("/elsewhere/a.json")),
            Path::new("/elsewhere/a.json").display().to_string()
        );
    }
}
