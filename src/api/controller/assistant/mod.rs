//! Assistant controller: connects routes to reply/summary usecases

use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::assistant::dto::suggest_reply_request::{SuggestReplyRequest, SuggestReplyResponse};
use crate::domain::assistant::dto::summarize_request::{SummarizeRequest, SummarizeResponse};
use crate::errors::AppError;

pub struct AssistantController;

impl AssistantController {
    pub async fn suggest_reply(
        State(state): State<AppState>,
        Json(payload): Json<SuggestReplyRequest>,
    ) -> Result<Json<SuggestReplyResponse>, AppError> {
        state.assistant_service.suggest_reply(payload).await.map(Json)
    }

    pub async fn summarize(
        State(state): State<AppState>,
        Json(payload): Json<SummarizeRequest>,
    ) -> Result<Json<SummarizeResponse>, AppError> {
        state.assistant_service.summarize(payload).await.map(Json)
    }
}
