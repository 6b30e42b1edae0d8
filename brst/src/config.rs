//! Configuration module for the brst CLI.
//!
//! Settings come from a `brst.toml` file. Command-line flags override
//! whatever the file says.

use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{BrstError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "brst.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scanner options.
    #[serde(default)]
    pub lex: LexConfig,

    /// Token dump options.
    #[serde(default)]
    pub output: OutputConfig,

    /// Options for `brst check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Scanner options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Keep scanning after a lexical error and report every diagnostic.
    #[serde(default)]
    pub recover: bool,
}

/// Token dump options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default format for `brst tokens`.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Options for `brst check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Worker threads. Unset means one per available core.
    #[serde(default)]
    pub jobs: Option<usize>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory (`<config dir>/brst/brst.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BrstError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| BrstError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("brst").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.lex.recover);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.check.jobs, None);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
verbose = true

[lex]
recover = true

[output]
format = "json"

[check]
jobs = 3
"#,
        )
        .unwrap();

        assert!(config.verbose);
        assert!(config.lex.recover);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.check.jobs, Some(3));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("[lex]\nrecover = true\n").unwrap();
        assert!(config.lex.recover);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = Config::parse("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, BrstError::Config(_)));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/brst.toml"));
        assert!(matches!(result, Err(BrstError::Config(_))));
    }
}
