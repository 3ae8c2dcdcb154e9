use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};

use crate::config::GatewayConfig;
use crate::domain::assistant::dto::suggest_reply_request::{SuggestReplyRequest, SuggestReplyResponse};
use crate::domain::assistant::dto::summarize_request::{SummarizeRequest, SummarizeResponse};
use crate::domain::assistant::service::{suggest_reply_service, summarize_service};
use crate::domain::llm::service::llm_chat_service::{CompletionProvider, OpenAiChatClient};
use crate::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub system_service: Arc<SystemService>,
    pub assistant_service: Arc<AssistantService>,
}

pub fn build_app_state(cfg: &GatewayConfig) -> Result<AppState> {
    let client = OpenAiChatClient::new(cfg)?;
    Ok(app_state_with_provider(Arc::new(client)))
}

/// Wire the state around any completion backend.
pub fn app_state_with_provider(provider: Arc<dyn CompletionProvider>) -> AppState {
    AppState {
        system_service: Arc::new(SystemService),
        assistant_service: Arc::new(AssistantService::new(provider)),
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    pub async fn health(&self) -> Value {
        json!({ "status": "ok" })
    }
}

#[derive(Clone)]
pub struct AssistantService {
    provider: Arc<dyn CompletionProvider>,
}

impl AssistantService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn suggest_reply(&self, req: SuggestReplyRequest) -> Result<SuggestReplyResponse, AppError> {
        suggest_reply_service::suggest_reply(self.provider.as_ref(), req).await
    }

    pub async fn summarize(&self, req: SummarizeRequest) -> Result<SummarizeResponse, AppError> {
        summarize_service::summarize(self.provider.as_ref(), req).await
    }
}
