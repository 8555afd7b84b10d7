/// Use cases module containing application business logic orchestration
mod visualize_graph;

pub use visualize_graph::VisualizeGraphUseCase;
