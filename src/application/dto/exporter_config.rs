use crate::quality_report::domain::metric_keys::{
    rating_metric_keys, report_metric_keys, DEFAULT_ISSUE_PAGE_SIZE, MAX_ISSUE_PAGE_SIZE,
};
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::path::PathBuf;

/// Configuration of one export run
///
/// Every operation of the exporter receives this struct explicitly.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Base URL of the server, without trailing slash
    pub server_url: String,
    pub project_key: String,
    /// User token, sent as the Basic-Auth user name
    pub token: String,
    pub issues_path: PathBuf,
    pub metrics_path: PathBuf,
    pub page_size: u32,
    pub rating_metrics: Vec<String>,
    pub report_metrics: Vec<String>,
}

impl ExporterConfig {
    pub fn builder() -> ExporterConfigBuilder {
        ExporterConfigBuilder::default()
    }
}

/// Builder for `ExporterConfig`, validating on `build()`
#[derive(Debug, Default)]
pub struct ExporterConfigBuilder {
    server_url: Option<String>,
    project_key: Option<String>,
    token: Option<String>,
    issues_path: Option<PathBuf>,
    metrics_path: Option<PathBuf>,
    page_size: Option<u32>,
    rating_metrics: Option<Vec<String>>,
    report_metrics: Option<Vec<String>>,
}

impl ExporterConfigBuilder {
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn project_key(mut self, key: impl Into<String>) -> Self {
        self.project_key = Some(key.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn issues_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.issues_path = Some(path.into());
        self
    }

    pub fn metrics_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metrics_path = Some(path.into());
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn rating_metrics(mut self, metrics: Vec<String>) -> Self {
        self.rating_metrics = Some(metrics);
        self
    }

    pub fn report_metrics(mut self, metrics: Vec<String>) -> Self {
        self.report_metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Result<ExporterConfig> {
        let server_url = normalize_server_url(&required(self.server_url, "server URL")?)?;
        let project_key = non_blank(required(self.project_key, "project key")?, "project key")?;
        let token = non_blank(required(self.token, "token")?, "token")?;
        let issues_path = self.issues_path.ok_or_else(|| missing("issues file name"))?;
        let metrics_path = self.metrics_path.ok_or_else(|| missing("metrics file name"))?;

        let page_size = self.page_size.unwrap_or(DEFAULT_ISSUE_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_ISSUE_PAGE_SIZE {
            return Err(ExportError::Validation {
                message: format!(
                    "page size must be between 1 and {}, got {}",
                    MAX_ISSUE_PAGE_SIZE, page_size
                ),
            }
            .into());
        }

        let rating_metrics = metric_list(self.rating_metrics, rating_metric_keys, "rating metrics")?;
        let report_metrics = metric_list(self.report_metrics, report_metric_keys, "report metrics")?;

        Ok(ExporterConfig {
            server_url,
            project_key,
            token,
            issues_path,
            metrics_path,
            page_size,
            rating_metrics,
            report_metrics,
        })
    }
}

fn missing(what: &str) -> anyhow::Error {
    ExportError::Validation {
        message: format!("{} is required", what),
    }
    .into()
}

fn required(value: Option<String>, what: &str) -> Result<String> {
    value.ok_or_else(|| missing(what))
}

fn non_blank(value: String, what: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ExportError::Validation {
            message: format!("{} must not be empty", what),
        }
        .into());
    }
    Ok(value)
}

fn metric_list(
    value: Option<Vec<String>>,
    default: fn() -> Vec<String>,
    what: &str,
) -> Result<Vec<String>> {
    let metrics = value.unwrap_or_else(default);
    if metrics.is_empty() || metrics.iter().any(|m| m.trim().is_empty()) {
        return Err(ExportError::Validation {
            message: format!("{} must be a non-empty list of metric keys", what),
        }
        .into());
    }
    Ok(metrics)
}

/// Checks the URL is http(s) and strips trailing slashes so that
/// `{server}/api/...` never contains `//`
fn normalize_server_url(raw: &str) -> Result<String> {
    let parsed = reqwest::Url::parse(raw).map_err(|e| ExportError::Validation {
        message: format!("invalid server URL '{}': {}", raw, e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ExportError::Validation {
            message: format!(
                "server URL must use http or https, got '{}'",
                parsed.scheme()
            ),
        }
        .into());
    }

    Ok(raw.trim_end_matches('/').to_string())
}
