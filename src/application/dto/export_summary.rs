use crate::quality_report::domain::Measure;
use serde_json::Value;

/// Outcome of the paginated issues export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueExportSummary {
    /// `total` as reported by the first page
    pub reported_total: u64,
    /// Data rows actually written to the report
    pub rows_written: u64,
    /// Number of `issues/search` requests issued
    pub pages_fetched: u32,
}

impl IssueExportSummary {
    pub fn is_consistent(&self) -> bool {
        self.reported_total == self.rows_written
    }
}

/// ExportSummary - result of a full export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub analysis_id: String,
    pub quality_gate: Value,
    pub ratings: Vec<Measure>,
    pub issues: IssueExportSummary,
    pub metrics_written: usize,
}
