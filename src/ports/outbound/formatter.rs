use crate::application::read_models::TraversalReport;
use crate::shared::Result;

/// GraphFormatter port for turning a traversal report into text
///
/// Implementations must iterate nodes in the report's discovery order.
pub trait GraphFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &TraversalReport) -> Result<String>;
}
