use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a bad configuration from a
/// failure that happened while fetching or rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph was traversed and reported
    Success = 0,
    /// Configuration file or overrides failed validation
    ConfigurationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, file I/O error, render failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that reached `main`.
    ///
    /// Configuration errors are recognised anywhere in the error chain so that
    /// added context does not change the exit code.
    pub fn for_error(error: &anyhow::Error) -> Self {
        let is_config_error = error.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<VisualizerError>(),
                Some(VisualizerError::ConfigError { .. } | VisualizerError::ConfigFileError { .. })
            )
        });

        if is_config_error {
            ExitCode::ConfigurationError
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph visualization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping every message paired with a hint for the user.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("Invalid configuration: {message}\n\n💡 Hint: Check the '{field}' entry in your config file or the matching command-line option")]
    ConfigError { field: String, message: String },

    #[error("{message}: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists, is readable and contains a valid YAML mapping")]
    ConfigFileError {
        path: PathBuf,
        message: String,
        details: String,
    },

    #[error("Graph source not found: {path}\n\n💡 Hint: {suggestion}")]
    SourceNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read graph source: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SourceReadError { path: PathBuf, details: String },

    #[error("Failed to fetch manifest: {url}\nDetails: {details}\n\n💡 Hint: Check the repository URL and your network connection")]
    FetchError { url: String, details: String },

    #[error("Invalid repository URL: {url}\nReason: {reason}\n\n💡 Hint: Remote mode expects an https:// URL pointing at a manifest or a GitHub repository")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render image: {path}\nDetails: {details}\n\n💡 Hint: Install Graphviz so that the 'dot' command is on your PATH, or pass --no-render")]
    RenderError { path: PathBuf, details: String },
}

impl VisualizerError {
    /// Shorthand for a configuration error on a single field
    pub fn config(field: &str, message: impl Into<String>) -> Self {
        VisualizerError::ConfigError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
