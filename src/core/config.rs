//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! A base directory may carry a `kindred.toml` next to the register file.
//! The file is optional and currently holds one table:
//!
//! ```toml
//! [paths]
//! input = "register.txt"
//! json = "out/name_list.json"
//! html = "out/index.html"
//! report = "out/discrepancy.list"
//! ```
//!
//! # Precedence
//!
//! Values resolve in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. `kindred.toml` in the base directory
//! 3. CLI flags (not handled here)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::paths::PathOverrides;

/// Name of the config file looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "kindred.toml";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// On-disk schema of `kindred.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// The `[paths]` table.
    pub paths: Option<PathsConfig>,
}

/// The `[paths]` table: per-file location overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub input: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl FileConfig {
    /// The path overrides this file contributes to the precedence stack.
    pub fn overrides(&self) -> PathOverrides {
        match &self.paths {
            Some(paths) => PathOverrides {
                input: paths.input.clone(),
                json: paths.json.clone(),
                html: paths.html.clone(),
                report: paths.report.clone(),
            },
            None => PathOverrides::default(),
        }
    }
}

/// Load `kindred.toml` from `dir` if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
/// A missing file is not an error; the caller falls back to defaults.
pub fn load(dir: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;

    let config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(load(temp.path()).unwrap().is_none());
    }

    #[test]
    fn empty_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();

        let config = load(temp.path()).unwrap().unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.overrides(), PathOverrides::default());
    }

    #[test]
    fn paths_table_loads() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"
            [paths]
            input = "register.txt"
            report = "out/discrepancy.list"
            "#,
        )
        .unwrap();

        let config = load(temp.path()).unwrap().unwrap();
        let overrides = config.overrides();

        assert_eq!(overrides.input, Some(PathBuf::from("register.txt")));
        assert_eq!(overrides.report, Some(PathBuf::from("out/discrepancy.list")));
        assert_eq!(overrides.json, None);
        assert_eq!(overrides.html, None);
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"
            [paths]
            input = "register.txt"
            unknown_field = true
            "#,
        )
        .unwrap();

        let result = load(temp.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn unknown_tables_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"
            [output]
            json = "somewhere.json"
            "#,
        )
        .unwrap();

        assert!(load(temp.path()).is_err());
    }

    #[test]
    fn parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not valid toml [").unwrap();

        let err = load(temp.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
