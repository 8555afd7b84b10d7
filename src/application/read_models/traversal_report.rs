//! Traversal report read model
//!
//! Wraps a [`TraversalResult`] with the run parameters that produced it, so
//! every formatter renders the same header information.

use crate::graph_analysis::domain::{Settings, TraversalResult};
use chrono::Utc;

/// Report consumed by every [`crate::ports::outbound::GraphFormatter`]
#[derive(Debug, Clone)]
pub struct TraversalReport {
    pub metadata: ReportMetadataView,
    /// Visited nodes in breadth-first discovery order
    pub nodes: Vec<NodeView>,
    /// Identifiers suppressed by the filter during the walk
    pub filtered_count: usize,
}

/// Parameters of the run that produced a report
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub package_name: String,
    pub repository: String,
    pub mode: String,
    pub graph_format: String,
    pub max_depth: usize,
    pub filter_substring: String,
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// One visited node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub name: String,
    pub depth: usize,
    pub dependencies: Vec<String>,
}

impl TraversalReport {
    /// Builds a report stamped with the current time
    pub fn build(settings: &Settings, result: &TraversalResult) -> Self {
        Self::build_at(settings, result, Utc::now().to_rfc3339())
    }

    /// Builds a report with an explicit timestamp
    pub fn build_at(settings: &Settings, result: &TraversalResult, generated_at: String) -> Self {
        let metadata = ReportMetadataView {
            package_name: settings.package_name().to_string(),
            repository: settings.repository().to_string(),
            mode: settings.mode().to_string(),
            graph_format: settings.graph_format().to_string(),
            max_depth: settings.max_depth(),
            filter_substring: settings.filter_substring().to_string(),
            generated_at,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let nodes = result
            .entries()
            .iter()
            .map(|entry| NodeView {
                name: entry.name.clone(),
                depth: entry.depth,
                dependencies: entry.dependencies.clone(),
            })
            .collect();

        Self {
            metadata,
            nodes,
            filtered_count: result.filtered_count(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.dependencies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
