pub mod bounded_traversal;
pub mod graph_parser;
pub mod manifest_parser;
pub mod substring_filter;
pub mod synthetic_graph_parser;

pub use bounded_traversal::BoundedTraversal;
pub use graph_parser::{parser_for, GraphParser};
pub use manifest_parser::ManifestParser;
pub use substring_filter::SubstringFilter;
pub use synthetic_graph_parser::SyntheticGraphParser;
