use std::collections::HashMap;

/// DependencyGraph aggregate: node identifier -> ordered direct dependencies
///
/// Dependency lists keep the order and duplicates they were authored with.
/// No self-reference or acyclicity rule is enforced here; the traversal copes
/// with both through its visited set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new(adjacency: HashMap<String, Vec<String>>) -> Self {
        Self { adjacency }
    }

    /// Graph holding a single node and its direct dependencies
    pub fn single(node: &str, dependencies: Vec<String>) -> Self {
        let mut adjacency = HashMap::new();
        adjacency.insert(node.to_string(), dependencies);
        Self { adjacency }
    }

    /// Replaces the dependency list of `node` (last write wins)
    pub fn insert(&mut self, node: String, dependencies: Vec<String>) {
        self.adjacency.insert(node, dependencies);
    }

    /// Direct dependencies of `node`; unknown nodes have none
    pub fn dependencies_of(&self, node: &str) -> &[String] {
        self.adjacency
            .get(node)
            .map(|deps| deps.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|deps| deps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
