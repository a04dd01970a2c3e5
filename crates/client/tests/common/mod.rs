//! In-process imitation of the jobs REST API for integration tests.
//!
//! Serves the four endpoints under `/api/jobs` on an ephemeral port and
//! records the `Content-Type` of every request it receives.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Mutable state behind the mock server.
#[derive(Default)]
pub struct MockState {
    pub records: Vec<Value>,
    pub content_types: Vec<Option<String>>,
    /// When set, every endpoint answers `500` without touching `records`.
    pub fail: bool,
}

pub type SharedState = Arc<Mutex<MockState>>;

/// Start a server backed by `state` and return its jobs base URL.
pub async fn spawn_jobs_server(state: SharedState) -> String {
    spawn(jobs_router(state)).await
}

/// Start `app` on `127.0.0.1:0` and return its `/api/jobs` base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    format!("http://{addr}/api/jobs")
}

/// A base URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/api/jobs")
}

pub fn seeded(records: Vec<Value>) -> SharedState {
    Arc::new(Mutex::new(MockState {
        records,
        ..Default::default()
    }))
}

pub fn jobs_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/jobs/", get(list_jobs).post(create_job))
        .route("/api/jobs/{id}", patch(update_job).delete(delete_job))
        .with_state(state)
}

fn record_content_type(state: &SharedState, headers: &HeaderMap) -> bool {
    let mut state = state.lock().unwrap();
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.content_types.push(content_type);
    state.fail
}

fn failure() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "simulated failure"})),
    )
}

fn id_of(record: &Value) -> Option<&str> {
    record.get("_id").and_then(Value::as_str)
}

async fn list_jobs(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if record_content_type(&state, &headers) {
        return failure();
    }
    let records = state.lock().unwrap().records.clone();
    (StatusCode::OK, Json(Value::Array(records)))
}

async fn create_job(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if record_content_type(&state, &headers) {
        return failure();
    }
    body["_id"] = json!(uuid::Uuid::new_v4().simple().to_string());
    body["__v"] = json!(0);
    state.lock().unwrap().records.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update_job(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if record_content_type(&state, &headers) {
        return failure();
    }
    let mut state = state.lock().unwrap();
    match state.records.iter_mut().find(|r| id_of(r) == Some(id.as_str())) {
        Some(record) => {
            record["status"] = body["status"].clone();
            (StatusCode::OK, Json(record.clone()))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Job not found"})),
        ),
    }
}

async fn delete_job(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if record_content_type(&state, &headers) {
        return failure();
    }
    let mut state = state.lock().unwrap();
    let before = state.records.len();
    state.records.retain(|r| id_of(r) != Some(id.as_str()));
    if state.records.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Job not found"})),
        );
    }
    (StatusCode::OK, Json(json!({"message": "Job deleted"})))
}
