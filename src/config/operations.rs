//! Config loading, validation, and lookup.

use super::model::Config;
use crate::error::{ReadmeError, Result};
use crate::writer::format_timestamp;
use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".readme-gen.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReadmeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ReadmeError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for a run started in `cwd`.
    ///
    /// An explicit path must exist. Without one, `.readme-gen.yaml` in `cwd`
    /// is used when present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let implicit = cwd.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            tracing::debug!("loading config from {}", implicit.display());
            return Self::load(implicit);
        }

        tracing::debug!("no config file, using defaults");
        Ok(Config::default())
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `output_path` and `manifest_path` must be non-empty
    /// - `timestamp_format` must be a non-empty chrono format that formats a
    ///   naive date and time into text without path separators
    /// - `code_fence_language` must not contain whitespace or backticks
    pub fn validate(&self) -> Result<()> {
        if self.output_path.trim().is_empty() {
            return Err(ReadmeError::ConfigError(
                "config validation failed: output_path must be non-empty".to_string(),
            ));
        }

        if self.manifest_path.trim().is_empty() {
            return Err(ReadmeError::ConfigError(
                "config validation failed: manifest_path must be non-empty".to_string(),
            ));
        }

        if self.timestamp_format.is_empty() {
            return Err(ReadmeError::ConfigError(
                "config validation failed: timestamp_format must be non-empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReadmeError::ConfigError(format!(
                "config validation failed: timestamp_format '{}' is not a valid chrono format",
                self.timestamp_format
            )));
        }
        if let Err(ReadmeError::ConfigError(message)) =
            format_timestamp(NaiveDateTime::default(), &self.timestamp_format)
        {
            return Err(ReadmeError::ConfigError(format!(
                "config validation failed: {}",
                message
            )));
        }

        if self
            .code_fence_language
            .chars()
            .any(|c| c.is_whitespace() || c == '`')
        {
            return Err(ReadmeError::ConfigError(format!(
                "config validation failed: code_fence_language must not contain whitespace or backticks (found '{}')",
                self.code_fence_language
            )));
        }

        Ok(())
    }
}
