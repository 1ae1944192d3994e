/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_summary;
mod exporter_config;

pub use export_summary::{ExportSummary, IssueExportSummary};
pub use exporter_config::{ExporterConfig, ExporterConfigBuilder};
