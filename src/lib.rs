//! dep-visualizer - depth-limited, filtered views of dependency graphs
//!
//! This library builds a dependency graph for one package, either from a
//! package manifest fetched over HTTPS or from a local synthetic graph file,
//! and walks it breadth-first with a depth bound and a substring filter.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Graph model, parsers and traversal
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): YAML config file loading and validation
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_visualizer::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let settings = Settings::new(
//!     "A".to_string(),
//!     "graph.txt".to_string(),
//!     SourceMode::Local,
//!     "graph.png".to_string(),
//!     2,
//!     String::new(),
//! )?;
//!
//! // Create adapters
//! let use_case = VisualizeGraphUseCase::new(
//!     FileSystemReader::new(),
//!     HttpManifestFetcher::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let response = use_case.execute(&settings)?;
//!
//! // Format output
//! let output = TextFormatter::new().format(&response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpManifestFetcher;
    pub use crate::adapters::outbound::rendering::GraphvizRenderer;
    pub use crate::application::dto::{OutputFormat, VisualizeResponse};
    pub use crate::application::read_models::TraversalReport;
    pub use crate::application::use_cases::VisualizeGraphUseCase;
    pub use crate::ports::outbound::{
        GraphFormatter, ImageRenderer, OutputPresenter, ProgressReporter, SourceFetcher,
    };
    pub use crate::graph_analysis::domain::{
        DependencyGraph, GraphFormat, Settings, SourceMode, TraversalResult,
    };
    pub use crate::graph_analysis::services::{
        parser_for, BoundedTraversal, GraphParser, ManifestParser, SyntheticGraphParser,
    };
    pub use crate::shared::Result;
}
