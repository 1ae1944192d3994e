/// Filesystem adapters for report output
mod csv_writer;

pub use csv_writer::{CsvReportSink, CsvTableWriter};
