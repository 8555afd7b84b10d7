//! Read models for report generation
//!
//! View-optimized structs that flatten domain data for the formatters.

pub mod traversal_report;

pub use traversal_report::{NodeView, ReportMetadataView, TraversalReport};
