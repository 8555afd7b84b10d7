use crate::application::read_models::TraversalReport;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// DotFormatter adapter for Graphviz DOT output
///
/// Every visited node gets its own statement so that leaves without edges
/// still appear in the rendered image.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes an identifier as a DOT string literal
    fn quote(identifier: &str) -> String {
        let escaped = identifier.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, report: &TraversalReport) -> Result<String> {
        let mut output = String::from("digraph dependencies {\n");

        for node in &report.nodes {
            writeln!(output, "    {};", Self::quote(&node.name))?;
        }

        for node in &report.nodes {
            let source = Self::quote(&node.name);
            for dependency in &node.dependencies {
                writeln!(output, "    {} -> {};", source, Self::quote(dependency))?;
            }
        }

        output.push_str("}\n");
        Ok(output)
    }
}
