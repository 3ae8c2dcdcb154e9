//! System controller: readiness

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::app_state::AppState;

pub struct SystemController;

impl SystemController {
    pub async fn health(State(state): State<AppState>) -> Json<Value> {
        Json(state.system_service.health().await)
    }
}
