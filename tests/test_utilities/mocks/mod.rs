/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_source_fetcher;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_source_fetcher::MockSourceFetcher;
