use super::GraphParser;
use crate::graph_analysis::domain::DependencyGraph;

const COMMENT_MARKER: char = '#';
const NODE_SEPARATOR: char = ':';

/// SyntheticGraphParser - reads the `NODE: DEP DEP ...` test-graph format
///
/// Node names are upper-cased. Dependency tokens must already be upper-case
/// alphabetic; anything else is dropped rather than normalized. A node that
/// appears on several lines keeps the dependencies of its last line.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticGraphParser;

impl SyntheticGraphParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
        let line = match line.split_once(COMMENT_MARKER) {
            Some((before_comment, _)) => before_comment,
            None => line,
        }
        .trim();

        if line.is_empty() {
            return None;
        }

        let (node, deps) = line.split_once(NODE_SEPARATOR)?;
        let node = node.trim().to_uppercase();
        if node.is_empty() {
            return None;
        }

        let dependencies = deps
            .split_whitespace()
            .filter(|token| is_dependency_token(token))
            .map(str::to_string)
            .collect();

        Some((node, dependencies))
    }
}

/// Non-empty, alphabetic, and unchanged by upper-casing
fn is_dependency_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic) && token.to_uppercase() == token
}

impl GraphParser for SyntheticGraphParser {
    fn parse(&self, content: &str, _package_name: &str) -> DependencyGraph {
        let mut graph = DependencyGraph::default();
        for (node, dependencies) in content.lines().filter_map(Self::parse_line) {
            graph.insert(node, dependencies);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> DependencyGraph {
        SyntheticGraphParser::new().parse(content, "A")
    }

    #[test]
    fn test_parse_simple_graph() {
        let graph = parse("A: B C\nB: C\nC:");

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.dependencies_of("A"), &["B".to_string(), "C".to_string()]);
        assert_eq!(graph.dependencies_of("B"), &["C".to_string()]);
        assert!(graph.contains_node("C"));
        assert!(graph.dependencies_of("C").is_empty());
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let graph = parse("# full line comment\n\n   \nA: B # trailing C\nB: # nothing\n");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.dependencies_of("A"), &["B".to_string()]);
        assert!(graph.dependencies_of("B").is_empty());
    }

    #[test]
    fn test_parse_uppercases_node_names() {
        let graph = parse("a: B\n  mixed : C");
        assert_eq!(graph.dependencies_of("A"), &["B".to_string()]);
        assert_eq!(graph.dependencies_of("MIXED"), &["C".to_string()]);
        assert!(!graph.contains_node("a"));
    }

    #[test]
    fn test_parse_drops_lowercase_and_non_alpha_tokens() {
        let graph = parse("A: B c Dd E1 F-G H");
        assert_eq!(graph.dependencies_of("A"), &["B".to_string(), "H".to_string()]);
    }

    #[test]
    fn test_parse_skips_lines_without_separator() {
        let graph = parse("A B C\nD: E");
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node("D"));
    }

    #[test]
    fn test_parse_skips_empty_node_name() {
        let graph = parse(": A B\nC: D");
        assert_eq!(graph.node_count(), 1);
        assert!(!graph.contains_node(""));
    }

    #[test]
    fn test_parse_last_line_wins() {
        let graph = parse("A: B\nA: C D\n");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.dependencies_of("A"), &["C".to_string(), "D".to_string()]);
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let graph = parse("A: B:C D");
        assert_eq!(graph.dependencies_of("A"), &["D".to_string()]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_self_reference() {
        let graph = parse("A: A B B");
        assert_eq!(
            graph.dependencies_of("A"),
            &["A".to_string(), "B".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("# only a comment").is_empty());
    }
}
