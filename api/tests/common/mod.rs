#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::TestServer;
use clap::Parser;
use menulens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const FAL_IMAGE_URL: &str = "https://fal.media/files/dish.png";

/// What the mock providers answer with. Tests change it before sending requests.
#[derive(Debug, Clone)]
pub struct Script {
    pub vision_reply: String,
    pub caption_reply: String,
    pub fal_submit_failure: Option<(StatusCode, Value)>,
    /// Status returned by each successive poll; the last one repeats.
    pub fal_statuses: Vec<String>,
    pub unsplash_reply: Value,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            vision_reply: json!({
                "dishes": [
                    {"name": "宫保鸡丁", "type": "热菜", "description": "花生 辣椒 鸡丁"}
                ]
            })
            .to_string(),
            caption_reply: "Glossy diced chicken with roasted peanuts and dried chilies".to_string(),
            fal_submit_failure: None,
            fal_statuses: vec!["COMPLETED".to_string()],
            unsplash_reply: json!({"total": 0, "total_pages": 0, "results": []}),
        }
    }
}

#[derive(Debug, Default)]
pub struct Upstream {
    pub script: Mutex<Script>,
    pub vision_calls: AtomicUsize,
    pub caption_calls: AtomicUsize,
    pub fal_submits: AtomicUsize,
    pub fal_polls: AtomicUsize,
    pub last_unsplash_query: Mutex<Option<String>>,
    pub last_openrouter_auth: Mutex<Option<String>>,
}

impl Upstream {
    pub fn update(&self, change: impl FnOnce(&mut Script)) {
        let mut script = self.script.lock().unwrap();
        change(&mut script);
    }

    pub fn vision_calls(&self) -> usize {
        self.vision_calls.load(Ordering::SeqCst)
    }

    pub fn fal_submits(&self) -> usize {
        self.fal_submits.load(Ordering::SeqCst)
    }

    pub fn fal_polls(&self) -> usize {
        self.fal_polls.load(Ordering::SeqCst)
    }

    pub fn last_openrouter_auth(&self) -> Option<String> {
        self.last_openrouter_auth.lock().unwrap().clone()
    }

    pub fn last_unsplash_query(&self) -> Option<String> {
        self.last_unsplash_query.lock().unwrap().clone()
    }

    fn script(&self) -> Script {
        self.script.lock().unwrap().clone()
    }
}

fn completion(content: String) -> Json<Value> {
    Json(json!({
        "id": "gen-1",
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
}

async fn chat_completions(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    *upstream.last_openrouter_auth.lock().unwrap() = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let script = upstream.script();
    let has_image = body["messages"]
        .as_array()
        .map(|messages| messages.iter().any(|m| m["content"].is_array()))
        .unwrap_or(false);

    if has_image {
        upstream.vision_calls.fetch_add(1, Ordering::SeqCst);
        completion(script.vision_reply)
    } else {
        upstream.caption_calls.fetch_add(1, Ordering::SeqCst);
        completion(script.caption_reply)
    }
}

async fn fal_submit(State(upstream): State<Arc<Upstream>>) -> Response {
    upstream.fal_submits.fetch_add(1, Ordering::SeqCst);

    match upstream.script().fal_submit_failure {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => Json(json!({"request_id": "req-1"})).into_response(),
    }
}

async fn fal_status(State(upstream): State<Arc<Upstream>>) -> Json<Value> {
    let poll = upstream.fal_polls.fetch_add(1, Ordering::SeqCst);
    let statuses = upstream.script().fal_statuses;
    let status = statuses
        .get(poll)
        .or_else(|| statuses.last())
        .cloned()
        .unwrap_or_else(|| "COMPLETED".to_string());

    Json(json!({"status": status}))
}

async fn fal_result() -> Json<Value> {
    Json(json!({
        "images": [{"url": FAL_IMAGE_URL, "content_type": "image/png", "width": 1024, "height": 1024}],
        "seed": 42
    }))
}

async fn unsplash_search(
    State(upstream): State<Arc<Upstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *upstream.last_unsplash_query.lock().unwrap() = params.get("query").cloned();
    Json(upstream.script().unsplash_reply)
}

fn upstream_router(upstream: Arc<Upstream>) -> Router {
    Router::new()
        .route("/openrouter/chat/completions", post(chat_completions))
        .route("/fal/fal-ai/fast-sdxl", post(fal_submit))
        .route("/fal/fal-ai/fast-sdxl/requests/{id}/status", get(fal_status))
        .route("/fal/fal-ai/fast-sdxl/requests/{id}", get(fal_result))
        .route("/unsplash/search/photos", get(unsplash_search))
        .with_state(upstream)
}

pub struct ApiContext {
    pub server: TestServer,
    pub upstream: Arc<Upstream>,
    upstream_task: JoinHandle<()>,
}

impl ApiContext {
    async fn start_upstream(upstream: Arc<Upstream>) -> (SocketAddr, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = upstream_router(upstream);

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (addr, task)
    }

    fn args(addr: SocketAddr, with_keys: bool, extra: &[&str]) -> Args {
        let base = format!("http://{}", addr);
        let mut argv: Vec<String> = vec![
            "menulens-api".to_string(),
            "--metrics-enabled".to_string(),
            "false".to_string(),
            "--openrouter-base-url".to_string(),
            format!("{}/openrouter", base),
            "--fal-queue-url".to_string(),
            format!("{}/fal", base),
            "--fal-poll-interval-ms".to_string(),
            "10".to_string(),
            "--unsplash-base-url".to_string(),
            format!("{}/unsplash", base),
            "--analyzer-retry-delay-ms".to_string(),
            "0".to_string(),
        ];

        if with_keys {
            for (flag, key) in [
                ("--openrouter-api-key", "test-openrouter-key"),
                ("--fal-api-key", "test-fal-key"),
                ("--unsplash-access-key", "test-unsplash-key"),
            ] {
                argv.push(flag.to_string());
                argv.push(key.to_string());
            }
        }

        argv.extend(extra.iter().map(|arg| arg.to_string()));

        Args::parse_from(argv)
    }

    /// Starts a mock upstream and an API server pointed at it.
    pub async fn start(with_keys: bool) -> Self {
        Self::start_with(with_keys, &[]).await
    }

    /// Same as [`ApiContext::start`], with additional server flags.
    pub async fn start_with(with_keys: bool, extra: &[&str]) -> Self {
        let upstream = Arc::new(Upstream::default());
        let (addr, upstream_task) = Self::start_upstream(upstream.clone()).await;

        let args = Arc::new(Self::args(addr, with_keys, extra));
        let app_state = state(args).await.unwrap();
        let app = router(app_state).unwrap();
        let server = TestServer::new(app).unwrap();

        Self {
            server,
            upstream,
            upstream_task,
        }
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self::start(true).await
    }

    async fn teardown(self) {
        self.upstream_task.abort();
    }
}
