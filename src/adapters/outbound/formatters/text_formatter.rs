use crate::application::read_models::{NodeView, TraversalReport};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

const NO_DEPENDENCIES: &str = "(no dependencies)";

/// TextFormatter adapter for a human-readable adjacency listing
///
/// One line per visited node in discovery order:
/// `NODE -> DEP1, DEP2` or `NODE -> (no dependencies)`.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_node(node: &NodeView) -> String {
        if node.dependencies.is_empty() {
            format!("{} -> {}", node.name, NO_DEPENDENCIES)
        } else {
            format!("{} -> {}", node.name, node.dependencies.join(", "))
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, report: &TraversalReport) -> Result<String> {
        let metadata = &report.metadata;
        let mut output = String::new();

        writeln!(
            output,
            "Dependency graph for {} (max depth {})",
            metadata.package_name, metadata.max_depth
        )?;
        writeln!(
            output,
            "Source: {} ({}, {})",
            metadata.repository, metadata.mode, metadata.graph_format
        )?;
        if !metadata.filter_substring.is_empty() {
            writeln!(
                output,
                "Filter: \"{}\" ({} identifier(s) suppressed)",
                metadata.filter_substring, report.filtered_count
            )?;
        }
        output.push('\n');

        if report.is_empty() {
            writeln!(
                output,
                "No nodes reachable from '{}'.",
                metadata.package_name
            )?;
            return Ok(output);
        }

        for node in &report.nodes {
            writeln!(output, "{}", Self::format_node(node))?;
        }

        output.push('\n');
        writeln!(
            output,
            "{} node(s), {} edge(s)",
            report.node_count(),
            report.edge_count()
        )?;

        Ok(output)
    }
}
