// Main entry point for the answer server

use std::sync::Arc;

use anyhow::{Context, Result};
use answer_core::kernel::AiProxyClient;
use answer_core::server::{build_app, AppState};
use answer_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,answer_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Course Answer API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    if config.aiproxy_token.is_empty() {
        tracing::warn!("AIPROXY_TOKEN is not set; remote completions will fail");
    }

    let ai = AiProxyClient::new(
        config.aiproxy_token.clone(),
        config.aiproxy_base_url.clone(),
        config.completion_model.clone(),
    );
    tracing::info!(model = %ai.model(), base_url = %config.aiproxy_base_url, "AI proxy client ready");

    // Build application
    let app = build_app(AppState::new(&config, Arc::new(ai)));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Answer endpoint: http://localhost:{}/api", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
