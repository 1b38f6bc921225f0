mod api;
mod router;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use pdfchat_core::config::load_dotenv;
use pdfchat_core::Config;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let config = Config::from_env();
    config.validate().context("invalid configuration")?;
    config.log_summary();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config));
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("pdfchat server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
