//! Mock chat-completion backend for integration tests
//!
//! Implements the minimal OpenAI-compatible surface the gateway talks
//! to, with canned responses and scripted failures.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock upstream that records requests and returns predictable replies
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    completion_count: AtomicU32,
    /// Number of requests to fail with 500 before succeeding
    fail_count: AtomicU32,
    /// Raw body returned on success (None = default canned response)
    response_body: Option<String>,
    /// Bodies received, in arrival order
    requests: Mutex<Vec<serde_json::Value>>,
}

impl MockUpstream {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, None).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, None).await
    }

    /// Start a mock server that returns `body` verbatim on success
    pub async fn start_with_body(body: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, Some(body.to_owned())).await
    }

    async fn start_inner(fail_count: u32, response_body: Option<String>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            completion_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            response_body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the upstream provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Bodies received so far, in arrival order
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    state.requests.lock().expect("requests lock").push(body);

    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.store(remaining - 1, Ordering::Relaxed);
        return (StatusCode::INTERNAL_SERVER_ERROR, "scripted failure").into_response();
    }

    let body = state.response_body.clone().unwrap_or_else(|| {
        serde_json::json!({
            "id": "cmpl-mock-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello from the mock upstream"},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    });

    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
