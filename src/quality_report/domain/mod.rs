/// Domain models for the quality report export
pub mod analysis;
pub mod issue;
pub mod measure;
pub mod metric_keys;

pub use analysis::{Analysis, AnalysisPage};
pub use issue::{Issue, IssuePage, ISSUES_CSV_HEADER};
pub use measure::{ComponentMeasures, Measure, MeasuredComponent, METRICS_CSV_HEADER};
