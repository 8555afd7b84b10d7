pub mod dependency_graph;
pub mod settings;
pub mod traversal_result;

pub use dependency_graph::DependencyGraph;
pub use settings::{GraphFormat, Settings, SourceMode};
pub use traversal_result::{TraversalEntry, TraversalResult};
