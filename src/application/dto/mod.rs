/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters, keeping the
/// domain layer isolated.
mod output_format;
mod visualize_response;

pub use output_format::OutputFormat;
pub use visualize_response::VisualizeResponse;
