use anyhow::{Context, Result};
use tracing::info;

use reply_assistant_core::app_state::build_app_state;
use reply_assistant_core::config::GatewayConfig;
use reply_assistant_core::logging::init_tracing;
use reply_assistant_core::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[reply-gateway] .env not loaded: {} (using system environment)", e);
    }

    let cfg = GatewayConfig::from_env()?;
    let _log_guard = init_tracing("info", cfg.log_dir.as_deref());

    info!(
        model = %cfg.model,
        base_url = %cfg.base_url,
        api_key = %cfg.masked_api_key(),
        timeout_ms = cfg.timeout_ms,
        "starting reply gateway"
    );

    let state = build_app_state(&cfg)?;
    let app = app_router().with_state(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("reply gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
