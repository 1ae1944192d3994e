/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (quality server, file system, console).
pub mod output_presenter;
pub mod progress_reporter;
pub mod quality_server_api;
pub mod report_sink;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use quality_server_api::QualityServerApi;
pub use report_sink::{ReportSink, TableWriter};
