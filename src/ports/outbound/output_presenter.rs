use crate::shared::Result;

/// OutputPresenter port for delivering a formatted report
///
/// The report goes either to stdout or to the file named by `--report`;
/// the rendered image is handled separately by [`super::ImageRenderer`].
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
