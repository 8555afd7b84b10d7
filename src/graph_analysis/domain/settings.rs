use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::fmt;
use std::path::Path;

/// Image extensions accepted for `output_file`
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "svg"];

/// Where the graph source comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// A file on the local filesystem
    Local,
    /// A manifest fetched over HTTPS
    Remote,
}

impl std::str::FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(SourceMode::Local),
            "remote" => Ok(SourceMode::Remote),
            _ => Err(format!(
                "Invalid mode: {}. Allowed values: local, remote",
                s
            )),
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Local => write!(f, "local"),
            SourceMode::Remote => write!(f, "remote"),
        }
    }
}

/// Grammar used to turn raw source text into a [`super::DependencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// `[dependencies]` table of a package manifest
    Manifest,
    /// One `NODE: DEP DEP` line per node
    Synthetic,
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Manifest => write!(f, "manifest"),
            GraphFormat::Synthetic => write!(f, "synthetic graph"),
        }
    }
}

/// Settings value object holding one run's validated configuration
///
/// Construct through [`Settings::new`], which enforces every invariant;
/// the record is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    package_name: String,
    repository: String,
    mode: SourceMode,
    output_file: String,
    max_depth: usize,
    filter_substring: String,
}

impl Settings {
    /// Validates and builds a settings record
    ///
    /// # Errors
    /// Returns a configuration error if:
    /// - `package_name`, `repository` or `output_file` is empty or whitespace
    /// - `output_file` does not end in png, jpg, jpeg or svg
    pub fn new(
        package_name: String,
        repository: String,
        mode: SourceMode,
        output_file: String,
        max_depth: usize,
        filter_substring: String,
    ) -> Result<Self> {
        let package_name = require_non_empty("package_name", package_name)?;
        let repository = require_non_empty("repository", repository)?;
        let output_file = require_non_empty("output_file", output_file)?;

        if image_extension(&output_file).is_none() {
            return Err(VisualizerError::config(
                "output_file",
                format!(
                    "output_file must have an image extension (.png, .jpg, .jpeg, .svg), got '{}'",
                    output_file
                ),
            )
            .into());
        }

        Ok(Self {
            package_name,
            repository,
            mode,
            output_file,
            max_depth,
            filter_substring,
        })
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn filter_substring(&self) -> &str {
        &self.filter_substring
    }

    /// Lower-cased extension of `output_file` (always one of [`IMAGE_EXTENSIONS`])
    pub fn output_extension(&self) -> String {
        image_extension(&self.output_file).unwrap_or_else(|| "png".to_string())
    }

    /// Chooses the parse strategy for this run
    ///
    /// Remote sources are always manifests. A local repository whose path ends
    /// in `.toml` is read as a local manifest; any other local path is treated
    /// as synthetic graph text.
    pub fn graph_format(&self) -> GraphFormat {
        match self.mode {
            SourceMode::Remote => GraphFormat::Manifest,
            SourceMode::Local if self.repository.to_lowercase().ends_with(".toml") => {
                GraphFormat::Manifest
            }
            SourceMode::Local => GraphFormat::Synthetic,
        }
    }
}

fn require_non_empty(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(
            VisualizerError::config(field, format!("Parameter {} must not be empty", field)).into(),
        );
    }
    Ok(trimmed.to_string())
}

fn image_extension(output_file: &str) -> Option<String> {
    Path::new(output_file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
