use super::GraphParser;
use crate::graph_analysis::domain::DependencyGraph;

/// Header that opens the direct dependency table
const DEPENDENCIES_HEADER: &str = "[dependencies]";

const COMMENT_MARKER: char = '#';

/// ManifestParser - extracts direct dependency names from a package manifest
///
/// Works line by line on the `[dependencies]` table instead of deserializing
/// the whole document, so a manifest with syntax errors elsewhere still
/// yields its dependency names.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestParser;

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }

    /// Returns the names declared in the `[dependencies]` table, in authored
    /// order and with duplicates kept
    ///
    /// Sub-table keys such as `serde.workspace = true` and entries from any
    /// other section are left out. A manifest without the table yields an
    /// empty vector.
    pub fn extract_dependencies(&self, content: &str) -> Vec<String> {
        let mut dependencies = Vec::new();
        let mut in_dependencies = false;

        for raw_line in content.lines() {
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            if line.starts_with('[') {
                in_dependencies = line == DEPENDENCIES_HEADER;
                continue;
            }

            if !in_dependencies {
                continue;
            }

            if let Some((key, _)) = line.split_once('=') {
                let name = key.trim();
                if !name.is_empty() && !name.contains('.') && !name.starts_with('[') {
                    dependencies.push(name.to_string());
                }
            }
        }

        dependencies
    }
}

impl GraphParser for ManifestParser {
    fn parse(&self, content: &str, package_name: &str) -> DependencyGraph {
        DependencyGraph::single(package_name, self.extract_dependencies(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_excludes_sub_tables_and_other_sections() {
        let content = "[dependencies]\nfoo = \"1.0\"\nbar.sub = \"x\"\n[dev-dependencies]\nbaz = \"2\"";
        let deps = ManifestParser::new().extract_dependencies(content);
        assert_eq!(deps, vec!["foo".to_string()]);
    }

    #[test]
    fn test_extract_realistic_manifest() {
        let content = r#"
[package]
name = "demo"
version = "0.1.0"

# runtime deps
[dependencies]
serde = { version = "1.0", features = ["derive"] }
anyhow = "1.0"
  # indented comment
tokio    =   { version = "1", features = ["full"] }

[dependencies.reqwest]
version = "0.12"

[build-dependencies]
cc = "1"
"#;
        let deps = ManifestParser::new().extract_dependencies(content);
        assert_eq!(deps, vec!["serde", "anyhow", "tokio"]);
    }

    #[test]
    fn test_extract_preserves_duplicates_and_order() {
        let content = "[dependencies]\nb = \"1\"\na = \"1\"\nb = \"2\"\n";
        let deps = ManifestParser::new().extract_dependencies(content);
        assert_eq!(deps, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_extract_reenters_section() {
        let content = "[dependencies]\na = \"1\"\n[features]\nx = []\n[dependencies]\nb = \"1\"\n";
        let deps = ManifestParser::new().extract_dependencies(content);
        assert_eq!(deps, vec!["a", "b"]);
    }

    #[test]
    fn test_extract_without_dependencies_section() {
        let content = "[package]\nname = \"demo\"\n";
        assert!(ManifestParser::new().extract_dependencies(content).is_empty());
        assert!(ManifestParser::new().extract_dependencies("").is_empty());
    }

    #[test]
    fn test_extract_skips_lines_without_equals_or_name() {
        let content = "[dependencies]\njust-a-word\n= \"1\"\nok = \"1\"\n";
        let deps = ManifestParser::new().extract_dependencies(content);
        assert_eq!(deps, vec!["ok"]);
    }

    #[test]
    fn test_header_with_trailing_text_is_not_dependencies() {
        let content = "[dependencies] # trailing\nfoo = \"1\"\n";
        assert!(ManifestParser::new().extract_dependencies(content).is_empty());
    }

    #[test]
    fn test_parse_builds_single_node_graph() {
        let graph = ManifestParser::new().parse("[dependencies]\nfoo = \"1\"\nbar = \"2\"\n", "app");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.dependencies_of("app"), &["foo".to_string(), "bar".to_string()]);
    }

    #[test]
    fn test_parse_empty_manifest_keeps_root() {
        let graph = ManifestParser::new().parse("", "app");
        assert!(graph.contains_node("app"));
        assert!(graph.dependencies_of("app").is_empty());
    }
}
