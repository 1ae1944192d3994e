use serde::Deserialize;

/// A single completed analysis of a project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Analysis {
    pub key: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Payload of `project_analyses/search`
///
/// The server orders analyses most-recent first, so with a page size
/// of one the first entry is the latest analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisPage {
    #[serde(default)]
    pub analyses: Vec<Analysis>,
}

impl AnalysisPage {
    pub fn latest(&self) -> Option<&Analysis> {
        self.analyses.first()
    }
}
