use axum::{routing::post, Router};

use crate::api::controller::assistant::AssistantController;
use crate::app_state::AppState;

pub fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/suggest_reply", post(AssistantController::suggest_reply))
        .route("/summarize", post(AssistantController::summarize))
}
