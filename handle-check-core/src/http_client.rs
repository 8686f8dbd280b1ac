//! `checkName` HTTP client
//!
//! Posts the handle as JSON and hands the decoded body back to the caller.
//! The body is decoded whatever the HTTP status: the service reports
//! rejections in its `errors` field, not through status codes.
//!
//! No timeout and no retry: one submit is exactly one request.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use crate::error::{CoreError, CoreResult, LookupError};
use crate::traits::HandleLookup;
use crate::types::{CheckNameRequest, CheckNameResponse};
use crate::utils::log_sanitizer::truncate_for_log;

/// Where the service listens when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/checkName";

const SERVICE_NAME: &str = "checkName";

/// `HandleLookup` backed by the collaborator's HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpHandleLookup {
    client: Client,
    endpoint: Url,
}

impl HttpHandleLookup {
    /// Build a client for `endpoint` with default HTTP settings
    pub fn new(endpoint: &str) -> CoreResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CoreError::HttpClient(e.to_string()))?;
        Self::with_client(client, endpoint)
    }

    /// Use a preconfigured `reqwest::Client`
    pub fn with_client(client: Client, endpoint: &str) -> CoreResult<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| CoreError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CoreError::InvalidEndpoint(format!(
                "{endpoint}: unsupported scheme {}",
                endpoint.scheme()
            )));
        }
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl HandleLookup for HttpHandleLookup {
    async fn check_name(&self, handle: &str) -> Result<CheckNameResponse, LookupError> {
        log::debug!("[{SERVICE_NAME}] POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&CheckNameRequest {
                username: handle.to_string(),
            })
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                detail: e.to_string(),
            })?;

        let status = response.status().as_u16();
        log::debug!("[{SERVICE_NAME}] Response Status: {status}");

        let body = response.text().await.map_err(|e| LookupError::Transport {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[{SERVICE_NAME}] Response Body: {}", truncate_for_log(&body));

        parse_response(status, &body)
    }
}

/// Decode a response body, rejecting bodies that answer nothing
fn parse_response(status: u16, body: &str) -> Result<CheckNameResponse, LookupError> {
    let parsed: CheckNameResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed {
            status: Some(status),
            detail: format!("{e}; body: {}", truncate_for_log(body)),
        })?;

    if parsed.is_empty() {
        return Err(LookupError::Malformed {
            status: Some(status),
            detail: "response carries neither data nor errors".to_string(),
        });
    }

    Ok(parsed)
}
