//! # Configuration Module
//!
//! This module provides configuration support for headerstamp, allowing users
//! to set the root directory and the project identity stamped into headers.
//!
//! Configuration can be specified in a `.headerstamp.toml` file or via the
//! `HEADERSTAMP_CONFIG` environment variable:
//!
//! ```toml
//! root = "../ChemProV"
//!
//! [project]
//! name = "ChemProV"
//! url = "http://helplab.org/chemprov"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::templates::{DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_URL, ProjectInfo};
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headerstamp.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADERSTAMP_CONFIG";

/// Root directory used when neither the command line nor a config file sets
/// one.
pub const DEFAULT_ROOT: &str = "../ChemProV";

/// Project identity overrides from the `[project]` table.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectSection {
  #[serde(default)]
  pub name: Option<String>,

  #[serde(default)]
  pub url: Option<String>,
}

/// Main configuration struct for headerstamp.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Directory to walk. Relative paths are resolved against the directory
  /// holding the config file.
  #[serde(default)]
  pub root: Option<PathBuf>,

  #[serde(default)]
  pub project: ProjectSection,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{}': {source}", .path.display())]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{}': {source}", .path.display())]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A project name or URL cannot be placed in the header.
  #[error("Invalid project {field}: {message}")]
  InvalidProject { field: &'static str, message: &'static str },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// A relative `root` is made relative to the file's directory so the
  /// config behaves the same from any working directory.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    if let Some(ref name) = config.project.name {
      validate_field("name", name)?;
    }
    if let Some(ref url) = config.project.url {
      validate_field("url", url)?;
    }

    if let Some(root) = config.root.take() {
      let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
      config.root = Some(base_dir.join(root));
    }

    Ok(config)
  }
}

/// Checks that a header field is usable: non-empty and on a single line.
pub fn validate_field(field: &'static str, value: &str) -> Result<(), ConfigError> {
  if value.trim().is_empty() {
    return Err(ConfigError::InvalidProject {
      field,
      message: "must not be empty",
    });
  }
  if value.contains(['\n', '\r']) {
    return Err(ConfigError::InvalidProject {
      field,
      message: "must be a single line",
    });
  }
  Ok(())
}

/// Picks the root directory: command line, then config file, then
/// [`DEFAULT_ROOT`].
pub fn resolve_root(cli_root: Option<PathBuf>, config: Option<&Config>) -> PathBuf {
  cli_root
    .or_else(|| config.and_then(|c| c.root.clone()))
    .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

/// Picks the project identity field by field: command line, then config
/// file, then the built-in defaults.
pub fn resolve_project(
  cli_name: Option<String>,
  cli_url: Option<String>,
  config: Option<&Config>,
) -> Result<ProjectInfo, ConfigError> {
  let section = config.map(|c| &c.project);

  let name = cli_name
    .or_else(|| section.and_then(|s| s.name.clone()))
    .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
  let url = cli_url
    .or_else(|| section.and_then(|s| s.url.clone()))
    .unwrap_or_else(|| DEFAULT_PROJECT_URL.to_string());

  validate_field("name", &name)?;
  validate_field("url", &url)?;

  Ok(ProjectInfo::new(name, url))
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADERSTAMP_CONFIG` environment variable
/// 3. `.headerstamp.toml` in `search_dir`
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `None` when `no_config` is set or no file is found. An explicit
/// `--config` path that does not exist is an error.
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config: Config = toml::from_str(concat!(
      "root = \"src\"\n",
      "\n",
      "[project]\n",
      "name = \"Widgets\"\n",
      "url = \"https://example.org/widgets\"\n",
    ))
    .expect("valid config should parse");

    assert_eq!(config.root, Some(PathBuf::from("src")));
    assert_eq!(config.project.name.as_deref(), Some("Widgets"));
    assert_eq!(config.project.url.as_deref(), Some("https://example.org/widgets"));
  }

  #[test]
  fn test_parse_empty_config() {
    let config: Config = toml::from_str("").expect("empty config should parse");
    assert!(config.root.is_none());
    assert_eq!(config.project, ProjectSection::default());
  }

  #[test]
  fn test_load_resolves_root_against_config_dir() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "root = \"project/src\"\n").expect("write config");

    let config = Config::load(&config_path).expect("load should succeed");
    assert_eq!(config.root, Some(temp_dir.path().join("project/src")));
  }

  #[test]
  fn test_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "[project\nname = 1").expect("write config");

    let err = Config::load(&config_path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
  }

  #[test]
  fn test_load_rejects_multiline_name() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "[project]\nname = \"\"\"two\nlines\"\"\"\n").expect("write config");

    let err = Config::load(&config_path).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidProject { field: "name", .. }));
  }

  #[test]
  fn test_resolve_precedence() {
    let config = Config {
      root: Some(PathBuf::from("/from/config")),
      project: ProjectSection {
        name: Some("FromConfig".to_string()),
        url: None,
      },
    };

    assert_eq!(resolve_root(None, None), PathBuf::from(DEFAULT_ROOT));
    assert_eq!(resolve_root(None, Some(&config)), PathBuf::from("/from/config"));
    assert_eq!(
      resolve_root(Some(PathBuf::from("cli")), Some(&config)),
      PathBuf::from("cli")
    );

    let project = resolve_project(None, None, Some(&config)).expect("valid project");
    assert_eq!(project.name, "FromConfig");
    assert_eq!(project.url, DEFAULT_PROJECT_URL);

    let project = resolve_project(Some("Cli".to_string()), None, Some(&config)).expect("valid project");
    assert_eq!(project.name, "Cli");
  }

  #[test]
  fn test_resolve_rejects_empty_url() {
    let err = resolve_project(None, Some("  ".to_string()), None).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidProject { field: "url", .. }));
  }

  #[test]
  fn test_no_config_skips_discovery() {
    let temp_dir = TempDir::new().expect("create temp dir");
    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "root = \"x\"\n").expect("write config");

    let config = load_config(None, temp_dir.path(), true).expect("load should succeed");
    assert!(config.is_none());
  }

  #[test]
  fn test_explicit_missing_config_is_an_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let missing = temp_dir.path().join("missing.toml");

    assert!(load_config(Some(&missing), temp_dir.path(), false).is_err());
  }
}
