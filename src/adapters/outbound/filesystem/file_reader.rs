use crate::ports::outbound::SourceFetcher;
use crate::shared::error::VisualizerError;
use crate::shared::security::validate_source_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading graph sources from disk
///
/// Implements the SourceFetcher port for local mode. Both synthetic graph
/// files and local manifests go through here.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the symlink, file-type and size checks
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_source_file(path)?;
        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFetcher for FileSystemReader {
    fn fetch(&self, location: &str) -> Result<String> {
        let path = Path::new(location);

        if !path.exists() {
            return Err(VisualizerError::SourceNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "File \"{}\" does not exist.\n   \
                     Check the 'repository' setting, or use mode 'remote' for URLs.",
                    location
                ),
            }
            .into());
        }

        self.safe_read_file(path).map_err(|e| {
            VisualizerError::SourceReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
