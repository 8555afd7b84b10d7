use crate::application::read_models::TraversalReport;

/// VisualizeResponse - result of the visualize use case
///
/// Carries the report for the formatters plus the size of the parsed source
/// graph, so adapters can tell "nothing parsed" apart from "everything
/// filtered away".
#[derive(Debug, Clone)]
pub struct VisualizeResponse {
    pub report: TraversalReport,
    /// Nodes in the parsed source graph
    pub source_node_count: usize,
    /// Edges in the parsed source graph
    pub source_edge_count: usize,
}

impl VisualizeResponse {
    pub fn new(report: TraversalReport, source_node_count: usize, source_edge_count: usize) -> Self {
        Self {
            report,
            source_node_count,
            source_edge_count,
        }
    }
}
