//! Configuration file support for dep-visualizer.
//!
//! Provides YAML-based configuration through `dep-visualizer.config.yml`
//! files, command-line overrides, and validation into [`Settings`].

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::graph_analysis::domain::{Settings, SourceMode};
use crate::shared::error::VisualizerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-visualizer.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional here; presence is checked in
/// [`ConfigFile::into_settings`] after command-line overrides are applied.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository: Option<String>,
    pub mode: Option<String>,
    pub output_file: Option<String>,
    /// Signed so that a negative value can be reported by name
    pub max_depth: Option<i64>,
    pub filter_substring: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; `Some` replaces the file value.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub package_name: Option<String>,
    pub repository: Option<String>,
    pub mode: Option<String>,
    pub output_file: Option<String>,
    pub max_depth: Option<usize>,
    pub filter_substring: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| VisualizerError::ConfigFileError {
        path: path.to_path_buf(),
        message: "Failed to read config file".to_string(),
        details: e.to_string(),
    })?;

    let config = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str::<ConfigFile>(&content).map_err(|e| {
            VisualizerError::ConfigFileError {
                path: path.to_path_buf(),
                message: "Failed to parse config file".to_string(),
                details: e.to_string(),
            }
        })?
    };

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

impl ConfigFile {
    /// Replaces file values with every override that is set
    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if overrides.package_name.is_some() {
            self.package_name = overrides.package_name;
        }
        if overrides.repository.is_some() {
            self.repository = overrides.repository;
        }
        if overrides.mode.is_some() {
            self.mode = overrides.mode;
        }
        if overrides.output_file.is_some() {
            self.output_file = overrides.output_file;
        }
        if let Some(max_depth) = overrides.max_depth {
            self.max_depth = Some(i64::try_from(max_depth).unwrap_or(i64::MAX));
        }
        if overrides.filter_substring.is_some() {
            self.filter_substring = overrides.filter_substring;
        }
        self
    }

    /// Validates the merged values and builds the run's [`Settings`]
    ///
    /// # Errors
    /// Returns a configuration error naming the offending field if a
    /// parameter is missing, empty, negative or not one of the allowed values
    pub fn into_settings(self) -> Result<Settings> {
        let package_name = required("package_name", self.package_name)?;
        let repository = required("repository", self.repository)?;
        let mode = required("mode", self.mode)?;
        let output_file = required("output_file", self.output_file)?;
        let max_depth = required("max_depth", self.max_depth)?;
        let filter_substring = required("filter_substring", self.filter_substring)?;

        let mode = SourceMode::from_str(&mode).map_err(|e| VisualizerError::config("mode", e))?;

        let max_depth = usize::try_from(max_depth).map_err(|_| {
            VisualizerError::config(
                "max_depth",
                format!("Parameter max_depth must be non-negative, got {}", max_depth),
            )
        })?;

        Settings::new(
            package_name,
            repository,
            mode,
            output_file,
            max_depth,
            filter_substring,
        )
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        VisualizerError::config(field, format!("Missing required parameter: {}", field)).into()
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
