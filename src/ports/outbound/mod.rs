/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, Graphviz).
pub mod formatter;
pub mod image_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod source_fetcher;

pub use formatter::GraphFormatter;
pub use image_renderer::ImageRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use source_fetcher::SourceFetcher;
