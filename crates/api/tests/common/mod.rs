//! Shared helpers for integration tests.
//!
//! Builds the application through [`build_app_router`] so tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses, with the Appwrite sender replaced by
//! a recording mock.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pushrelay_api::config::ServerConfig;
use pushrelay_api::push::PushSender;
use pushrelay_api::router::build_app_router;
use pushrelay_api::state::AppState;
use pushrelay_appwrite::messaging::{CreatePush, MessagingError, PushMessage};

/// Canned provider behaviour for the mock sender.
enum MockResponse {
    /// Every call succeeds with a fixed message ID.
    Success,
    /// Every call fails with this provider error.
    ApiError { status: u16, message: String },
}

/// Recording stand-in for the Appwrite sender.
///
/// Captures every [`CreatePush`] it receives so tests can assert on the
/// outbound call (or its absence).
pub struct MockPushSender {
    calls: Mutex<Vec<CreatePush>>,
    response: MockResponse,
}

impl MockPushSender {
    /// A sender whose every call succeeds.
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: MockResponse::Success,
        })
    }

    /// A sender whose every call fails with the given provider error.
    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: MockResponse::ApiError {
                status,
                message: message.to_string(),
            },
        })
    }

    /// Snapshot of the pushes sent so far.
    pub fn calls(&self) -> Vec<CreatePush> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for MockPushSender {
    async fn create_push(&self, push: &CreatePush) -> Result<PushMessage, MessagingError> {
        self.calls.lock().unwrap().push(push.clone());
        match &self.response {
            MockResponse::Success => Ok(PushMessage {
                id: "msg_test_1".to_string(),
            }),
            MockResponse::ApiError { status, message } => Err(MessagingError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given push sender.
pub fn build_test_app(sender: Arc<MockPushSender>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        push: sender,
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a raw (possibly invalid) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body should be valid JSON")
}
