//! In-process stand-in for the image generations API.
//!
//! `POST /v1/images/generations` replies from a queue of scripted replies and
//! records every accepted request. `GET /images/{name}` serves bytes registered
//! with [`MockImageApi::serve_image`], which is what preview downloads hit.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

pub const GENERATIONS_PATH: &str = "/v1/images/generations";

/// One accepted generation request.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl GenerationCall {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Scripted reply to the next generation request.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl Reply {
    /// 200 with the given JSON body.
    pub fn ok(body: &str) -> Self {
        Self::raw(200, body)
    }

    /// 200 whose `data` lists the given URLs.
    pub fn urls(urls: &[&str]) -> Self {
        let data: Vec<_> = urls
            .iter()
            .map(|url| serde_json::json!({ "url": url }))
            .collect();
        Self::ok(&serde_json::json!({ "created": 1, "data": data }).to_string())
    }

    /// Non-success status with an `{"error": {"message": ...}}` body.
    pub fn error(status: u16, message: &str) -> Self {
        Self::raw(
            status,
            &serde_json::json!({ "error": { "message": message } }).to_string(),
        )
    }

    /// Arbitrary status and body, for malformed responses.
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct ApiState {
    calls: Arc<Mutex<Vec<GenerationCall>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
    images: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

pub struct MockImageApi {
    addr: SocketAddr,
    state: ApiState,
    shutdown: watch::Sender<bool>,
}

impl MockImageApi {
    /// Binds an ephemeral local port and starts serving.
    pub async fn start() -> Self {
        let state = ApiState::default();
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let app = Router::new()
            .route(GENERATIONS_PATH, post(generate))
            .route("/images/{name}", get(image))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock image API");
        let addr = listener.local_addr().expect("bound address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown,
        }
    }

    pub async fn reply(&self, reply: Reply) {
        self.state.replies.lock().await.push_back(reply);
    }

    pub async fn serve_image(&self, name: &str, bytes: Vec<u8>) {
        self.state
            .images
            .lock()
            .await
            .insert(name.to_string(), bytes);
    }

    pub async fn calls(&self) -> Vec<GenerationCall> {
        self.state.calls.lock().await.clone()
    }

    pub fn generations_url(&self) -> String {
        format!("http://{}{}", self.addr, GENERATIONS_PATH)
    }

    pub fn image_url(&self, name: &str) -> String {
        format!("http://{}/images/{}", self.addr, name)
    }
}

impl Drop for MockImageApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn generate(State(state): State<ApiState>, headers: HeaderMap, body: Bytes) -> Response {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            r#"{"error": {"message": "expected application/json"}}"#,
        )
            .into_response();
    }

    let Ok(body) = serde_json::from_slice::<serde_json::Value>(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"error": {"message": "body is not JSON"}}"#,
        )
            .into_response();
    };
    state.calls.lock().await.push(GenerationCall { headers, body });

    // An unscripted call gets an empty result list.
    let reply = state
        .replies
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| Reply::ok(r#"{"data": []}"#));
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (
        reply.status,
        [(CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

async fn image(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    match state.images.lock().await.get(&name) {
        Some(bytes) => ([(CONTENT_TYPE, "image/png")], bytes.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
