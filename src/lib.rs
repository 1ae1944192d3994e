//! sonar-export - export SonarQube issues and metrics to CSV reports
//!
//! This library resolves the latest analysis of a project, fetches its
//! quality gate status and ratings, and writes the project's issues and
//! metrics to two CSV reports. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`quality_report`): Report models and pagination rules
//! - **Application Layer** (`application`): The export use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use sonar_export::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = ExporterConfig::builder()
//!     .server_url("http://localhost:9000")
//!     .project_key("my-project")
//!     .token("squ_token")
//!     .issues_path("issues.csv")
//!     .metrics_path("metrics.csv")
//!     .build()?;
//!
//! let api = SonarHttpClient::new(&config.server_url, &config.token)?;
//! let use_case = ReportExporterUseCase::new(
//!     api,
//!     CsvReportSink::new(),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let summary = use_case.execute(&config)?;
//! println!("{} issue(s) exported", summary.issues.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod quality_report;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::CsvReportSink;
    pub use crate::adapters::outbound::network::SonarHttpClient;
    pub use crate::application::dto::{ExportSummary, ExporterConfig, IssueExportSummary};
    pub use crate::application::use_cases::ReportExporterUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, QualityServerApi, ReportSink, TableWriter,
    };
    pub use crate::quality_report::domain::{
        Analysis, AnalysisPage, Issue, IssuePage, Measure, ISSUES_CSV_HEADER, METRICS_CSV_HEADER,
    };
    pub use crate::shared::error::ExportError;
    pub use crate::shared::Result;
}
