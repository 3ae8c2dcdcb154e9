use axum::{http::Uri, Router};
use http::{request::Parts, HeaderValue};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::app_state::AppState;
use crate::errors::AppError;

/// Origins of the local UIs that call the gateway from a browser.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8501",
    "http://127.0.0.1:8501",
    "http://localhost:3000",
    "http://localhost:5173",
];

const EXTENSION_ORIGIN_PREFIX: &str = "chrome-extension://";

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(crate::api::routes::system_routes::system_routes())
        .merge(crate::api::routes::assistant_routes::assistant_routes())
        .fallback(handler_404)
        .layer(cors_layer())
}

pub fn is_allowed_origin(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(&origin)
        || (origin.starts_with(EXTENSION_ORIGIN_PREFIX) && origin.len() > EXTENSION_ORIGIN_PREFIX.len())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _: &Parts| {
            origin.to_str().map(is_allowed_origin).unwrap_or(false)
        }))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

// Handler for 404 Not Found
async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
