//! HTTP client for the gateway, used by the `reply-client` binary.

pub mod form;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::assistant::dto::suggest_reply_request::{SuggestReplyRequest, SuggestReplyResponse};
use crate::domain::assistant::dto::summarize_request::{SummarizeRequest, SummarizeResponse};

pub const DEFAULT_BACKEND_URL: &str = "https://linkedin-ai-assistant-backend.onrender.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a gateway call, worded for the person at the terminal.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request timed out. The backend may be waking up. Please try again in a few seconds.")]
    Timeout,

    #[error("Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request failed: could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

pub struct GatewayClient {
    http: Client,
    base_url: String,
    request_timeout: Duration,
    probe_timeout: Duration,
}

impl GatewayClient {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        probe_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
            probe_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Best-effort `GET /health` to wake an idle backend. Never fails.
    pub async fn warm_up(&self) {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).timeout(self.probe_timeout).send().await {
            Ok(resp) => debug!(status = resp.status().as_u16(), "readiness probe answered"),
            Err(e) => debug!(error = %e, "readiness probe failed; continuing"),
        }
    }

    pub async fn suggest_reply(
        &self,
        req: &SuggestReplyRequest,
    ) -> Result<SuggestReplyResponse, ClientError> {
        self.post_json("/suggest_reply", req).await
    }

    pub async fn summarize(&self, req: &SummarizeRequest) -> Result<SummarizeResponse, ClientError> {
        self.post_json("/summarize", req).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .post(&url)
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<T>().await?)
    }
}
