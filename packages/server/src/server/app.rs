//! Application setup and server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::answering::AnswerPipeline;
use crate::kernel::BaseAI;
use crate::server::routes::{answer_handler, health_handler, method_not_allowed};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: AnswerPipeline,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &Config, ai: Arc<dyn BaseAI>) -> Self {
        Self {
            pipeline: AnswerPipeline::new(config.profile.clone(), ai),
            upload_dir: config.upload_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/api", post(answer_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler))
        // ServiceBuilder layers run top to bottom
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(body_limit),
        )
        .with_state(state)
}
