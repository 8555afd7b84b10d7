use crate::shared::Result;
use std::path::Path;

/// ImageRenderer port for producing an image from Graphviz DOT source
pub trait ImageRenderer {
    /// Renders `dot_source` into `output_path`
    ///
    /// # Arguments
    /// * `dot_source` - A complete `digraph` document
    /// * `output_path` - Destination file; its extension selects the image type
    ///
    /// # Errors
    /// Returns an error if the renderer is unavailable or fails
    fn render(&self, dot_source: &str, output_path: &Path) -> Result<()>;
}
