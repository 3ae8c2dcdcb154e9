// src/domain/llm/service/llm_chat_service.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::domain::llm::dto::llm_chat_request::{CompletionOptions, LlmChatRequest, LlmMessage};
use crate::domain::llm::dto::llm_chat_response::LlmChatResponse;

/// Failure talking to the completion provider. `Display` is what callers see.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Error code: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("Upstream response contained no completion text")]
    EmptyCompletion,
}

/// A single-shot chat completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<LlmMessage>,
        options: CompletionOptions,
    ) -> Result<String, UpstreamError>;
}

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiChatClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(cfg: &GatewayConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            url: completions_url(&cfg.base_url),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiChatClient {
    async fn complete(
        &self,
        messages: Vec<LlmMessage>,
        options: CompletionOptions,
    ) -> Result<String, UpstreamError> {
        let body = LlmChatRequest {
            model: self.model.clone(),
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        debug!(url = %self.url, model = %self.model, "calling completion provider");

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "completion provider returned an error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: LlmChatResponse = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        parsed.first_content().ok_or(UpstreamError::EmptyCompletion)
    }
}

fn completions_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}
