use crate::shared::Result;
use std::path::Path;

/// TableWriter port for appending rows to an open report
pub trait TableWriter {
    /// Appends one data row
    fn write_row(&mut self, row: &[&str]) -> Result<()>;

    /// Flushes buffered rows and closes the report
    ///
    /// Dropping a writer without calling `finish` still releases the file,
    /// but rows still buffered may be lost.
    fn finish(self: Box<Self>) -> Result<()>;
}

/// ReportSink port for creating tabular reports
///
/// This port abstracts where exported rows end up (CSV files on disk,
/// in-memory tables in tests).
pub trait ReportSink {
    /// Creates (or truncates) the report at `path` and writes `header`
    ///
    /// # Errors
    /// Returns an error if the destination cannot be created or the header
    /// cannot be written
    fn create_table(&self, path: &Path, header: &[&str]) -> Result<Box<dyn TableWriter>>;
}
