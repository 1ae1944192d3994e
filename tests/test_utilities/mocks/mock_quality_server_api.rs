use serde_json::{json, Value};
use sonar_export::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock QualityServerApi serving canned payloads and recording requests
#[derive(Clone)]
pub struct MockQualityServerApi {
    pub analyses: Vec<Analysis>,
    pub quality_gate: Value,
    pub measures: HashMap<String, String>,
    pub issue_pages: HashMap<u32, Vec<Issue>>,
    pub reported_total: Option<u64>,
    pub failing_status: Option<u16>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockQualityServerApi {
    pub fn new() -> Self {
        Self {
            analyses: vec![Analysis {
                key: "AX-latest".to_string(),
                date: None,
            }],
            quality_gate: json!({"projectStatus": {"status": "OK", "conditions": []}}),
            measures: HashMap::new(),
            issue_pages: HashMap::new(),
            reported_total: None,
            failing_status: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn without_analyses(mut self) -> Self {
        self.analyses.clear();
        self
    }

    pub fn with_measure(mut self, metric: &str, value: &str) -> Self {
        self.measures.insert(metric.to_string(), value.to_string());
        self
    }

    pub fn with_issues(mut self, page: u32, issues: Vec<Issue>) -> Self {
        self.issue_pages.insert(page, issues);
        self
    }

    pub fn with_reported_total(mut self, total: u64) -> Self {
        self.reported_total = Some(total);
        self
    }

    pub fn with_failure(mut self, status: u16) -> Self {
        self.failing_status = Some(status);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(status) = self.failing_status {
            return Err(ExportError::Api {
                status,
                url: format!("mock://{}", request),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockQualityServerApi {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityServerApi for MockQualityServerApi {
    fn search_project_analyses(&self, project_key: &str, page_size: u32) -> Result<AnalysisPage> {
        self.record(format!(
            "project_analyses/search?project={}&ps={}",
            project_key, page_size
        ))?;
        Ok(AnalysisPage {
            analyses: self.analyses.clone(),
        })
    }

    fn quality_gate_status(&self, analysis_id: &str) -> Result<Value> {
        self.record(format!(
            "qualitygates/project_status?analysisId={}",
            analysis_id
        ))?;
        Ok(self.quality_gate.clone())
    }

    /// Answers in the order the keys were requested, skipping unknown metrics
    fn component_measures(&self, component: &str, metric_keys: &[String]) -> Result<Vec<Measure>> {
        self.record(format!(
            "measures/component?component={}&metricKeys={}",
            component,
            metric_keys.join(",")
        ))?;
        Ok(metric_keys
            .iter()
            .filter_map(|key| self.measures.get(key).map(|value| Measure::new(key.as_str(), value.as_str())))
            .collect())
    }

    fn search_issues(&self, component: &str, page: u32, page_size: u32) -> Result<IssuePage> {
        self.record(format!(
            "issues/search?componentKeys={}&p={}&ps={}",
            component, page, page_size
        ))?;
        let total = self
            .reported_total
            .unwrap_or_else(|| self.issue_pages.values().map(|p| p.len() as u64).sum());
        Ok(IssuePage {
            total,
            issues: self.issue_pages.get(&page).cloned().unwrap_or_default(),
        })
    }
}
