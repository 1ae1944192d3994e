use crate::quality_report::domain::{AnalysisPage, IssuePage, Measure};
use crate::shared::Result;
use serde_json::Value;

/// QualityServerApi port for reading from the code-quality server
///
/// One method per web-service endpoint the exporter consumes. The
/// payloads are returned as parsed by the adapter; interpreting them is
/// left to the use case.
pub trait QualityServerApi {
    /// `GET api/project_analyses/search?project={project_key}&ps={page_size}`
    fn search_project_analyses(&self, project_key: &str, page_size: u32) -> Result<AnalysisPage>;

    /// `GET api/qualitygates/project_status?analysisId={analysis_id}`
    ///
    /// The document is passed through untouched.
    fn quality_gate_status(&self, analysis_id: &str) -> Result<Value>;

    /// `GET api/measures/component?component={component}&metricKeys={metric_keys}`
    ///
    /// # Returns
    /// The `component.measures` array, in server order
    fn component_measures(&self, component: &str, metric_keys: &[String]) -> Result<Vec<Measure>>;

    /// `GET api/issues/search?componentKeys={component}&p={page}&ps={page_size}`
    fn search_issues(&self, component: &str, page: u32, page_size: u32) -> Result<IssuePage>;
}
