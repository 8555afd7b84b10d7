use crate::shared::Result;

/// SourceFetcher port for loading raw graph text
///
/// This port abstracts where graph text comes from: a file on disk, or a
/// manifest served over HTTPS. The core only ever sees the returned text.
pub trait SourceFetcher {
    /// Loads the complete content found at `location`
    ///
    /// # Arguments
    /// * `location` - A filesystem path or URL, depending on the implementation
    ///
    /// # Errors
    /// Returns an error if the source is missing, unreachable or unreadable.
    /// Fetching is all-or-nothing: partial content is never returned.
    fn fetch(&self, location: &str) -> Result<String>;
}
