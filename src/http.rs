use crate::error::{Error, Result};
use reqwest::{Client, StatusCode, header};
use std::time::Duration;
use tracing::{debug, warn};

/// Thin wrapper over `reqwest::Client`. One attempt per request, no retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::http(e.to_string()))?;

        Ok(Self { client })
    }

    pub async fn post_json_raw(&self, url: &str, body: String) -> Result<String> {
        let req = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);

        debug!(url, "sending POST request");
        let resp = req.send().await.map_err(|e| {
            warn!(url, "request failed before a response arrived");
            Error::http(e.to_string())
        })?;
        Self::handle_response(resp).await
    }

    async fn handle_response(resp: reqwest::Response) -> Result<String> {
        let status = resp.status();

        if status == StatusCode::OK {
            return resp.text().await.map_err(|e| Error::http(e.to_string()));
        }
        let body = resp.text().await.unwrap_or_default();
        Err(Error::api(status.to_string(), body))
    }
}
