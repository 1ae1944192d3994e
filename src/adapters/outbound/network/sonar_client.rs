use crate::ports::outbound::QualityServerApi;
use crate::quality_report::domain::{AnalysisPage, ComponentMeasures, IssuePage, Measure};
use crate::shared::error::ExportError;
use crate::shared::Result;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Builds the Basic-Auth header value for a user token
///
/// The token is the user name and the password is left empty.
pub fn basic_auth_header(token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:", token)))
}

/// SonarHttpClient adapter for the SonarQube web API
///
/// This adapter implements the QualityServerApi port over blocking
/// reqwest. One client is built per run and reused for every request.
///
/// # Error policy
/// - Any status other than 200 fails with `ExportError::Api`
/// - A body that is not the expected JSON fails with `ExportError::Parse`
/// - No retries; client default timeouts apply
pub struct SonarHttpClient {
    client: Client,
    server_url: String,
    authorization: String,
}

impl SonarHttpClient {
    /// Creates a client for `server_url` authenticating with `token`
    pub fn new(server_url: &str, token: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sonar-export/{}", version);
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
            authorization: basic_auth_header(token),
        })
    }

    /// Builds `{server}/api/{endpoint}?{query}`
    ///
    /// Query values are percent-encoded by the caller.
    fn endpoint_url(&self, endpoint: &str, query: &[(&str, String)]) -> String {
        let query = query
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/api/{}?{}", self.server_url, endpoint, query)
    }

    /// Issues a GET and parses the JSON body
    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint_url(endpoint, query);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ExportError::Api {
                status: status.as_u16(),
                url,
            }
            .into());
        }

        response.json::<T>().map_err(|e| {
            ExportError::Parse {
                context: format!("{} response", endpoint),
                details: decode_details(&e),
            }
            .into()
        })
    }
}

/// reqwest wraps the serde_json error; its message names the bad field
fn decode_details(error: &reqwest::Error) -> String {
    match std::error::Error::source(error) {
        Some(source) => format!("{}: {}", error, source),
        None => error.to_string(),
    }
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encodes each key but keeps the separating commas literal
fn encode_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| encode(v))
        .collect::<Vec<_>>()
        .join(",")
}

impl QualityServerApi for SonarHttpClient {
    fn search_project_analyses(&self, project_key: &str, page_size: u32) -> Result<AnalysisPage> {
        self.get_json(
            "project_analyses/search",
            &[("project", encode(project_key)), ("ps", page_size.to_string())],
        )
    }

    fn quality_gate_status(&self, analysis_id: &str) -> Result<Value> {
        self.get_json(
            "qualitygates/project_status",
            &[("analysisId", encode(analysis_id))],
        )
    }

    fn component_measures(&self, component: &str, metric_keys: &[String]) -> Result<Vec<Measure>> {
        let payload: ComponentMeasures = self.get_json(
            "measures/component",
            &[
                ("component", encode(component)),
                ("metricKeys", encode_list(metric_keys)),
            ],
        )?;
        Ok(payload.into_measures())
    }

    fn search_issues(&self, component: &str, page: u32, page_size: u32) -> Result<IssuePage> {
        self.get_json(
            "issues/search",
            &[
                ("componentKeys", encode(component)),
                ("p", page.to_string()),
                ("ps", page_size.to_string()),
            ],
        )
    }
}
