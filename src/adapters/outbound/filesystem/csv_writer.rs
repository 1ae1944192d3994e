use crate::ports::outbound::{ReportSink, TableWriter};
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// CsvReportSink adapter for writing reports as CSV files
///
/// This adapter implements the ReportSink port. Existing files are
/// truncated; fields containing commas, quotes or newlines are quoted.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReportSink;

impl CsvReportSink {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists and that the output
    /// path is not a symbolic link
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(ExportError::FileWrite {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }

        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(ExportError::FileWrite {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl ReportSink for CsvReportSink {
    fn create_table(&self, path: &Path, header: &[&str]) -> Result<Box<dyn TableWriter>> {
        Self::validate_output_path(path)?;

        let file = File::create(path).map_err(|e| ExportError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut table = CsvTableWriter::new(BufWriter::new(file), path.to_path_buf());
        table.write_row(header)?;
        Ok(Box::new(table))
    }
}

/// CsvTableWriter writes rows of one report through the csv crate
pub struct CsvTableWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
}

impl<W: Write> CsvTableWriter<W> {
    pub fn new(inner: W, path: PathBuf) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
            path,
        }
    }

    fn write_error(&self, details: impl ToString) -> anyhow::Error {
        ExportError::FileWrite {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

impl<W: Write> TableWriter for CsvTableWriter<W> {
    fn write_row(&mut self, row: &[&str]) -> Result<()> {
        self.writer
            .write_record(row)
            .map_err(|e| self.write_error(e))
    }

    fn finish(mut self: Box<Self>) -> Result<()> {
        self.writer.flush().map_err(|e| self.write_error(e))
    }
}
