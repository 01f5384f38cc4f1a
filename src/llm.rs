use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("logzilla/", env!("CARGO_PKG_VERSION"));

/// Request body for the generation endpoint. Serializes to `{"prompt": ...}`
/// and nothing else.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub prompt: &'a str,
}

/// Client for a local text-generation server that answers with
/// `{"report": "<markdown>"}`.
pub struct ReportClient {
    endpoint: String,
    http: HttpClient,
}

impl ReportClient {
    pub fn new(endpoint: impl Into<String>, http: HttpClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::new(USER_AGENT, config.timeout())?;
        Ok(Self::new(config.url.clone(), http))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = serde_json::to_string(&GenerateRequest { prompt })
            .map_err(|e| Error::Serialize(e.to_string()))?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "requesting report");
        let response_text = self
            .http
            .post_json_raw(&self.endpoint, body)
            .await
            .map_err(|e| {
                warn!("report API error: {e}");
                e
            })?;

        // A JSON `null` body decodes fine but carries no report.
        let data: Option<Map<String, Value>> =
            serde_json::from_str(&response_text).map_err(|e| Error::decode(e.to_string()))?;
        match data {
            Some(data) => extract_report(&data),
            None => Err(Error::UnexpectedFormat),
        }
    }
}

/// Pull the string-valued `report` field out of a decoded response.
pub fn extract_report(data: &Map<String, Value>) -> Result<String> {
    match data.get("report") {
        Some(Value::String(report)) => Ok(report.clone()),
        _ => Err(Error::UnexpectedFormat),
    }
}
