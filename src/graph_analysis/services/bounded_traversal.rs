use super::SubstringFilter;
use crate::graph_analysis::domain::{DependencyGraph, Settings, TraversalResult};
use std::collections::HashSet;

/// BoundedTraversal - depth-limited breadth-first walk over a dependency graph
///
/// The walk is level-synchronous and iterative: each level's frontier is a
/// plain vector, and the visited set lives only for the duration of one
/// [`BoundedTraversal::traverse`] call.
///
/// Two suppression rules apply to nodes taken from a frontier and to every
/// dependency considered for emission:
/// - an identifier already visited is never admitted or emitted again
/// - an identifier containing the filter substring is dropped entirely
///
/// The start node is exempt from the filter: the walk always begins at the
/// root the caller asked for.
///
/// A node with no entry in the graph is a leaf whose dependencies are
/// unknown. It is listed under the parent that discovered it and counts as
/// visited, but it never becomes a key of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedTraversal {
    max_depth: usize,
    filter_substring: String,
}

impl BoundedTraversal {
    pub fn new(max_depth: usize, filter_substring: impl Into<String>) -> Self {
        Self {
            max_depth,
            filter_substring: filter_substring.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.max_depth(), settings.filter_substring())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn filter_substring(&self) -> &str {
        &self.filter_substring
    }

    /// Walks `graph` from `start` and returns the visited nodes in discovery
    /// order with their filtered dependency lists
    ///
    /// Nodes at depth `max_depth` are still emitted but are not expanded, so
    /// they always carry an empty list. An empty `start`, or one missing
    /// from the graph, yields an empty result.
    pub fn traverse(&self, graph: &DependencyGraph, start: &str) -> TraversalResult {
        let mut result = TraversalResult::new();
        if start.is_empty() {
            return result;
        }

        let filter = SubstringFilter::new(&self.filter_substring);
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: Vec<String> = vec![start.to_string()];
        let mut depth = 0;

        while depth <= self.max_depth && !frontier.is_empty() {
            let mut next_frontier: Vec<String> = Vec::new();
            let mut queued: HashSet<&str> = HashSet::new();

            for node in &frontier {
                if visited.contains(node) {
                    continue;
                }
                if depth > 0 && filter.rejects(node) {
                    continue;
                }
                visited.insert(node.clone());
                if !graph.contains_node(node) {
                    continue;
                }

                let candidates: &[String] = if depth < self.max_depth {
                    graph.dependencies_of(node)
                } else {
                    &[]
                };

                let mut emitted = Vec::new();
                for dep in candidates {
                    if visited.contains(dep) || filter.rejects(dep) {
                        continue;
                    }
                    emitted.push(dep.clone());
                    if queued.insert(dep.as_str()) {
                        next_frontier.push(dep.clone());
                    }
                }

                result.push(node.clone(), depth, emitted);
            }

            frontier = next_frontier;
            depth += 1;
        }

        result.record_filtered(filter.rejected_count());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_analysis::services::{GraphParser, SyntheticGraphParser};
    use std::collections::HashMap;

    fn graph(edges: &[(&str, &[&str])]) -> DependencyGraph {
        let adjacency: HashMap<String, Vec<String>> = edges
            .iter()
            .map(|(node, deps)| {
                (
                    node.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        DependencyGraph::new(adjacency)
    }

    fn as_pairs(result: &TraversalResult) -> Vec<(String, Vec<String>)> {
        result
            .entries()
            .iter()
            .map(|entry| (entry.name.clone(), entry.dependencies.clone()))
            .collect()
    }

    fn pairs(expected: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        expected
            .iter()
            .map(|(node, deps)| {
                (
                    node.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_parsed_synthetic_graph() {
        let graph = SyntheticGraphParser::new().parse("A: B C\nB: C\nC:", "A");
        let result = BoundedTraversal::new(2, "").traverse(&graph, "A");

        assert_eq!(
            as_pairs(&result),
            pairs(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &[])])
        );
    }

    #[test]
    fn test_filter_excludes_key_and_value() {
        let graph = graph(&[("A", &["B", "C"])]);
        let result = BoundedTraversal::new(1, "B").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["C"])]));
        assert!(!result.contains("B"));
        assert_eq!(result.filtered_count(), 1);
    }

    #[test]
    fn test_depth_zero_does_not_expand() {
        let graph = graph(&[("A", &["B", "C"]), ("B", &["C"])]);
        let result = BoundedTraversal::new(0, "").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &[])]));
    }

    #[test]
    fn test_depth_cutoff_emits_boundary_nodes_without_dependencies() {
        let graph = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])]);
        let result = BoundedTraversal::new(1, "").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["B"]), ("B", &[])]));
        assert_eq!(result.deepest_level(), Some(1));
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = graph(&[("A", &["B"]), ("B", &["A"])]);
        let result = BoundedTraversal::new(10, "").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["B"]), ("B", &[])]));
    }

    #[test]
    fn test_self_reference_is_suppressed() {
        let graph = graph(&[("A", &["A", "B"]), ("B", &[])]);
        let result = BoundedTraversal::new(3, "").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["B"]), ("B", &[])]));
    }

    #[test]
    fn test_level_order_across_levels() {
        let graph = graph(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["E"]),
            ("D", &["F"]),
            ("E", &[]),
            ("F", &[]),
        ]);
        let result = BoundedTraversal::new(5, "").traverse(&graph, "A");

        let order: Vec<&str> = result.node_names().collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
        let depths: Vec<usize> = result.entries().iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_shared_dependency_queued_once_but_listed_by_each_parent() {
        let graph = graph(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["D"]),
            ("D", &[]),
        ]);
        let result = BoundedTraversal::new(3, "").traverse(&graph, "A");

        assert_eq!(
            as_pairs(&result),
            pairs(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"]), ("D", &[])])
        );
    }

    #[test]
    fn test_sibling_visited_earlier_in_level_is_not_emitted() {
        let graph = graph(&[("A", &["B", "C"]), ("B", &[]), ("C", &["B"])]);
        let result = BoundedTraversal::new(3, "").traverse(&graph, "A");

        assert_eq!(
            as_pairs(&result),
            pairs(&[("A", &["B", "C"]), ("B", &[]), ("C", &[])])
        );
    }

    #[test]
    fn test_duplicate_dependencies_are_kept_in_emitted_list() {
        let graph = graph(&[("A", &["B", "B"]), ("B", &[])]);
        let result = BoundedTraversal::new(2, "").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["B", "B"]), ("B", &[])]));
    }

    #[test]
    fn test_start_node_is_exempt_from_filter() {
        let graph = graph(&[("AB", &["C", "XB"]), ("C", &[])]);
        let result = BoundedTraversal::new(1, "B").traverse(&graph, "AB");

        assert_eq!(as_pairs(&result), pairs(&[("AB", &["C"]), ("C", &[])]));
    }

    #[test]
    fn test_filter_prunes_whole_subtree() {
        let graph = graph(&[("A", &["TEST", "B"]), ("TEST", &["C"]), ("B", &[])]);
        let result = BoundedTraversal::new(4, "TEST").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["B"]), ("B", &[])]));
        assert!(!result.contains("C"));
    }

    #[test]
    fn test_nodes_missing_from_graph_are_leaves() {
        let graph = graph(&[("A", &["B", "C"]), ("C", &["B"])]);
        let result = BoundedTraversal::new(3, "").traverse(&graph, "A");

        assert_eq!(as_pairs(&result), pairs(&[("A", &["B", "C"]), ("C", &[])]));
        assert!(!result.contains("B"));
    }

    #[test]
    fn test_manifest_graph_lists_direct_dependencies_only() {
        let graph = graph(&[("app", &["serde", "anyhow"])]);
        let result = BoundedTraversal::new(5, "").traverse(&graph, "app");

        assert_eq!(as_pairs(&result), pairs(&[("app", &["serde", "anyhow"])]));
    }

    #[test]
    fn test_missing_start_node_yields_empty_result() {
        let graph = graph(&[("A", &["B"])]);
        let result = BoundedTraversal::new(3, "").traverse(&graph, "Z");

        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_start_yields_empty_result() {
        let graph = graph(&[("A", &["B"])]);
        let result = BoundedTraversal::new(3, "").traverse(&graph, "");
        assert!(result.is_empty());
    }

    #[test]
    fn test_traversal_is_deterministic() {
        let graph = graph(&[
            ("A", &["D", "B", "C"]),
            ("B", &["E", "D"]),
            ("C", &["E", "F"]),
            ("F", &["A", "G"]),
        ]);
        let traversal = BoundedTraversal::new(4, "G");

        let first = traversal.traverse(&graph, "A");
        let second = traversal.traverse(&graph, "A");
        assert_eq!(first, second);
    }

    #[test]
    fn test_invariants_hold_on_dense_graph() {
        let names = ["A", "B", "C", "D", "E", "F", "G", "H"];
        let mut adjacency = HashMap::new();
        for (i, node) in names.iter().enumerate() {
            let deps: Vec<String> = names
                .iter()
                .enumerate()
                .filter(|(j, _)| (i * 3 + j) % 4 != 0)
                .map(|(_, n)| n.to_string())
                .collect();
            adjacency.insert(node.to_string(), deps);
        }
        let graph = DependencyGraph::new(adjacency);

        for max_depth in 0..4 {
            let result = BoundedTraversal::new(max_depth, "E").traverse(&graph, "A");

            let mut seen = HashSet::new();
            for entry in result.entries() {
                assert!(seen.insert(entry.name.clone()), "duplicate key {}", entry.name);
                assert!(entry.depth <= max_depth);
                assert!(!entry.name.contains('E'));
                assert!(entry.dependencies.iter().all(|d| !d.contains('E')));
                if entry.depth == max_depth {
                    assert!(entry.dependencies.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_from_settings() {
        use crate::graph_analysis::domain::SourceMode;

        let settings = Settings::new(
            "A".to_string(),
            "graph.txt".to_string(),
            SourceMode::Local,
            "out.png".to_string(),
            3,
            "X".to_string(),
        )
        .unwrap();
        let traversal = BoundedTraversal::from_settings(&settings);

        assert_eq!(traversal.max_depth(), 3);
        assert_eq!(traversal.filter_substring(), "X");
    }
}
