use super::{ManifestParser, SyntheticGraphParser};
use crate::graph_analysis::domain::{DependencyGraph, GraphFormat};

/// GraphParser - turns raw source text into an adjacency mapping
///
/// Parsing is best-effort: lines that do not fit the grammar are skipped, so
/// implementations never fail. Text without any usable line yields an empty
/// or dependency-less graph.
pub trait GraphParser {
    /// Parses `content` into a [`DependencyGraph`]
    ///
    /// # Arguments
    /// * `content` - Raw text returned by a source fetcher
    /// * `package_name` - Root package; grammars that only describe one
    ///   package (manifests) attach their dependencies to this node
    fn parse(&self, content: &str, package_name: &str) -> DependencyGraph;
}

/// Returns the parse strategy for `format`
pub fn parser_for(format: GraphFormat) -> Box<dyn GraphParser> {
    match format {
        GraphFormat::Manifest => Box::new(ManifestParser::new()),
        GraphFormat::Synthetic => Box::new(SyntheticGraphParser::new()),
    }
}
