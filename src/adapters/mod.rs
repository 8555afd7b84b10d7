/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem, HTTPS,
/// console feedback, report formatters and the Graphviz renderer.
pub mod outbound;
