use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::assistant::dto::summarize_request::{SummarizeRequest, SummarizeResponse};
use crate::domain::assistant::prompts::{summary_messages, SUMMARY_OPTIONS};
use crate::domain::llm::service::llm_chat_service::CompletionProvider;
use crate::errors::AppError;

pub async fn summarize(
    provider: &dyn CompletionProvider,
    req: SummarizeRequest,
) -> Result<SummarizeResponse, AppError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput("Text is empty".into()));
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, chars = text.chars().count(), language = %req.language, bullets = req.bullets, "summarize");

    let messages = summary_messages(text, &req.language, req.bullets);
    let summary = provider.complete(messages, SUMMARY_OPTIONS).await.map_err(|e| {
        warn!(%request_id, error = %e, "summarize upstream failure");
        AppError::from(e)
    })?;

    Ok(SummarizeResponse {
        summary: summary.trim().to_string(),
    })
}
