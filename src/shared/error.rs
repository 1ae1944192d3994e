use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI jobs to tell a misconfigured invocation apart
/// from a failed export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - both reports were written
    Success = 0,
    /// Missing or invalid command-line arguments
    UsageError = 1,
    /// Application error (API error, network error, parse error, file I/O error, etc.)
    ApplicationError = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UsageError => write!(f, "Usage Error (1)"),
            ExitCode::ApplicationError => write!(f, "Application Error (2)"),
        }
    }
}

/// Application-specific errors for the report export.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Command-line parse failure; `message` is the rendered clap error,
    /// which already carries the usage line
    #[error("{message}")]
    Usage { message: String },

    #[error("No analysis data found for project: {project_key}\n\n💡 Hint: Run at least one analysis of the project before exporting")]
    NoAnalysisFound { project_key: String },

    #[error("Failed to fetch data from API. HTTP response code: {status}\nURL: {url}")]
    Api { status: u16, url: String },

    #[error("Failed to parse {context}\nDetails: {details}")]
    Parse { context: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    /// Validation error for builder patterns and config files
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ExportError {
    /// Maps an error to the process exit code it should produce
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ExportError::Usage { .. } => ExitCode::UsageError,
            _ => ExitCode::ApplicationError,
        }
    }
}
