//! HTTP client for the remote analysis service.
//!
//! The service exposes a single operation: POST the source code as
//! `{"code": "..."}` and receive an envelope of either
//! `{"success": true, "result": ...}` or `{"success": false, "error": "..."}`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::model::AnalysisResult;

/// Fallback shown when the service reports failure without a message.
pub const FALLBACK_SERVICE_ERROR: &str = "Unknown backend error";

/// Generic message for any failure to obtain a well-formed response.
/// The underlying detail goes to diagnostics, never to the user.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Network or backend error. Check server logs.";

/// Errors that can occur during an analysis request.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("service returned HTTP {0}")]
    Http(u16),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("success response missing result payload")]
    MissingResult,
    #[error("service reported failure: {}", .0.as_deref().unwrap_or("no message"))]
    Service(Option<String>),
}

impl AnalyzeError {
    /// The message shown to the user. Service-reported failures surface
    /// their message verbatim (or a fixed fallback); every transport-class
    /// failure collapses to one generic message.
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::Service(Some(msg)) => msg.clone(),
            AnalyzeError::Service(None) => FALLBACK_SERVICE_ERROR.to_string(),
            _ => TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Request body for the analyze operation.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub code: &'a str,
}

/// Response envelope wrapping either a result or an error message.
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Client for the remote analysis service.
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl AnalyzerClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rubylens/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            endpoint: config.endpoint().to_string(),
            timeout: Duration::from_millis(config.timeout_ms()),
        }
    }

    /// Submit source code for analysis. Issues exactly one request.
    pub async fn analyze(&self, code: &str) -> Result<AnalysisResult, AnalyzeError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { code })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyzeError::Timeout
                } else {
                    AnalyzeError::Network(e)
                }
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(AnalyzeError::Http(status));
        }

        let body = response.text().await.map_err(AnalyzeError::Network)?;
        decode_response(&body)
    }

    /// The endpoint this client submits to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a response body into a result or a typed error.
pub fn decode_response(body: &str) -> Result<AnalysisResult, AnalyzeError> {
    let envelope: AnalyzeResponse = serde_json::from_str(body)?;

    if envelope.success {
        envelope.result.ok_or(AnalyzeError::MissingResult)
    } else {
        Err(AnalyzeError::Service(envelope.error))
    }
}
