use crate::shared::Result;

/// OutputPresenter port for presenting diagnostic output
///
/// The exporter prints the latest analysis id, the quality gate status
/// and the ratings before writing the reports. This port abstracts where
/// those blocks go.
pub trait OutputPresenter {
    /// Presents one block of diagnostic output
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
