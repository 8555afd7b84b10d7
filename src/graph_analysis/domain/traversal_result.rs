use std::collections::HashSet;

/// One visited node together with the dependencies emitted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEntry {
    pub name: String,
    /// Depth at which the node was discovered (start node = 0)
    pub depth: usize,
    pub dependencies: Vec<String>,
}

/// TraversalResult: visited node -> filtered dependency list, in
/// breadth-first discovery order
///
/// Keys are unique; [`TraversalResult::push`] refuses a node that is already
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalResult {
    entries: Vec<TraversalEntry>,
    keys: HashSet<String>,
    filtered: usize,
}

impl TraversalResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node; returns `false` and leaves the result untouched if the
    /// node is already a key
    pub fn push(&mut self, name: String, depth: usize, dependencies: Vec<String>) -> bool {
        if !self.keys.insert(name.clone()) {
            return false;
        }
        self.entries.push(TraversalEntry {
            name,
            depth,
            dependencies,
        });
        true
    }

    pub fn entries(&self) -> &[TraversalEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.dependencies.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(name)
    }

    /// Node names in discovery order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.dependencies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records how many identifiers the filter suppressed during the walk
    pub fn record_filtered(&mut self, count: usize) {
        self.filtered = count;
    }

    /// Identifiers suppressed by the filter (repeat sightings counted)
    pub fn filtered_count(&self) -> usize {
        self.filtered
    }

    /// Deepest discovery depth, or `None` for an empty result
    pub fn deepest_level(&self) -> Option<usize> {
        self.entries.iter().map(|entry| entry.depth).max()
    }
}
