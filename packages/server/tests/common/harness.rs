//! Test harness for driving the real router in-process.
//!
//! Each test gets a fresh router, a scripted [`MockAI`] in place of the AI
//! proxy, and its own temporary upload directory.

use anyhow::{Context, Result};
use answer_core::kernel::MockAI;
use answer_core::server::{build_app, AppState};
use answer_core::Config;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness that manages per-test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.send(MultipartForm::new().text("question", "hi").into_request()).await;
///     // ... assertions
/// }
/// ```
pub struct TestHarness {
    /// Stand-in for the AI proxy. Clones share the same reply queue.
    pub ai: MockAI,
    router: Router,
    upload_dir: TempDir,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Upload directory is removed when dropped
    }
}

impl TestHarness {
    pub fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let upload_dir = tempfile::tempdir().context("Failed to create upload directory")?;

        let mut config = Config::from_lookup(|_| None).context("Failed to build test config")?;
        config.upload_dir = upload_dir.path().to_path_buf();

        let ai = MockAI::new();
        let router = build_app(AppState::new(&config, Arc::new(ai.clone())));

        Ok(Self {
            ai,
            router,
            upload_dir,
        })
    }

    /// Send a request and decode the JSON response body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    /// Number of files left behind in the upload directory.
    pub fn stored_uploads(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}
