/// Use cases module containing application business logic orchestration
mod report_exporter;

pub use report_exporter::ReportExporterUseCase;
