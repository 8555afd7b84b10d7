use crate::application::read_models::{NodeView, ReportMetadataView, TraversalReport};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    package: &'a str,
    repository: &'a str,
    mode: &'a str,
    source_format: &'a str,
    max_depth: usize,
    filter: &'a str,
    filtered_count: usize,
    generated_at: &'a str,
    tool: Tool<'a>,
    nodes: Vec<JsonNode<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonNode<'a> {
    name: &'a str,
    depth: usize,
    dependencies: &'a [String],
}

/// JsonFormatter adapter for machine-readable output
///
/// Nodes are emitted as an array so discovery order survives serialization.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_tool(metadata: &ReportMetadataView) -> Tool<'_> {
        Tool {
            name: &metadata.tool_name,
            version: &metadata.tool_version,
        }
    }

    fn build_nodes(nodes: &[NodeView]) -> Vec<JsonNode<'_>> {
        nodes
            .iter()
            .map(|node| JsonNode {
                name: &node.name,
                depth: node.depth,
                dependencies: &node.dependencies,
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, report: &TraversalReport) -> Result<String> {
        let metadata = &report.metadata;
        let document = JsonReport {
            package: &metadata.package_name,
            repository: &metadata.repository,
            mode: &metadata.mode,
            source_format: &metadata.graph_format,
            max_depth: metadata.max_depth,
            filter: &metadata.filter_substring,
            filtered_count: report.filtered_count,
            generated_at: &metadata.generated_at,
            tool: Self::build_tool(metadata),
            nodes: Self::build_nodes(&report.nodes),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
