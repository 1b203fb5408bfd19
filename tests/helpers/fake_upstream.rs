// ABOUTME: In-process stand-in for the Morizo AI backend and the OpenAI transcription API
// ABOUTME: Binds an Axum router to an ephemeral local port and records what it received

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A request the fake upstream received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Route-specific label, e.g. `usage` or `history:<id>`
    pub label: String,
    /// Authorization header as received, if any
    pub authorization: Option<String>,
    /// JSON body, for POST routes
    pub body: Option<Value>,
}

/// How the fake upstream should answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamBehavior {
    /// Answer every route successfully
    Healthy,
    /// Answer every route with the given status
    Failing(u16),
    /// Answer successfully, with `null` and float usage counters
    SparseUsage,
}

#[derive(Clone)]
struct FakeState {
    behavior: UpstreamBehavior,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running fake upstream
pub struct FakeUpstream {
    /// Base URL, e.g. `http://127.0.0.1:49152`
    pub base_url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeUpstream {
    /// Start a fake upstream on an ephemeral port
    pub async fn start(behavior: UpstreamBehavior) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            behavior,
            recorded: Arc::clone(&recorded),
        };

        let app = Router::new()
            .route("/api/subscription/usage", get(usage))
            .route("/api/menu/history/:history_id", delete(delete_history))
            .route("/api/revenuecat/webhook", post(webhook))
            .route("/v1/audio/transcriptions", post(transcription))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            recorded,
        }
    }

    /// Requests received so far
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on
pub fn unreachable_base_url() -> String {
    // Port 9 (discard) is closed on test hosts
    "http://127.0.0.1:9".to_owned()
}

fn record(state: &FakeState, label: String, headers: &HeaderMap, body: Option<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    state.recorded.lock().unwrap().push(RecordedRequest {
        label,
        authorization,
        body,
    });
}

fn failure(status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap();
    (status, Json(json!({ "detail": "upstream failure" }))).into_response()
}

async fn usage(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    record(&state, "usage".to_owned(), &headers, None);
    match state.behavior {
        UpstreamBehavior::Failing(status) => failure(status),
        UpstreamBehavior::SparseUsage => Json(json!({
            "success": true,
            "date": "2025-01-31",
            "menu_bulk_count": null,
            "menu_step_count": 2.0,
            "plan_type": "free"
        }))
        .into_response(),
        // menu_step_count and ocr_count deliberately omitted
        UpstreamBehavior::Healthy => Json(json!({
            "success": true,
            "date": "2025-01-31",
            "menu_bulk_count": 2,
            "plan_type": "free",
            "limits": { "menu_bulk": 3, "menu_step": 5, "ocr": 1 }
        }))
        .into_response(),
    }
}

async fn delete_history(
    State(state): State<FakeState>,
    Path(history_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(&state, format!("history:{history_id}"), &headers, None);
    match state.behavior {
        UpstreamBehavior::Failing(status) => failure(status),
        UpstreamBehavior::Healthy | UpstreamBehavior::SparseUsage => Json(json!({
            "success": true,
            "deleted_id": history_id,
            "message": "deleted"
        }))
        .into_response(),
    }
}

async fn webhook(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let event_type = body["type"].clone();
    record(&state, "webhook".to_owned(), &headers, Some(body));
    match state.behavior {
        UpstreamBehavior::Failing(status) => failure(status),
        UpstreamBehavior::Healthy | UpstreamBehavior::SparseUsage => Json(json!({
            "status": "ok",
            "event_type": event_type
        }))
        .into_response(),
    }
}

/// Records the form fields as a JSON object; the file is reduced to its type and size
async fn transcription(
    State(state): State<FakeState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut fields = serde_json::Map::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        if name == "file" {
            let content_type = field.content_type().unwrap_or_default().to_owned();
            let size = field.bytes().await.unwrap().len();
            fields.insert("file_content_type".to_owned(), json!(content_type));
            fields.insert("file_size".to_owned(), json!(size));
        } else {
            fields.insert(name, json!(field.text().await.unwrap()));
        }
    }
    record(
        &state,
        "transcription".to_owned(),
        &headers,
        Some(Value::Object(fields)),
    );

    match state.behavior {
        UpstreamBehavior::Failing(status) => failure(status),
        UpstreamBehavior::Healthy | UpstreamBehavior::SparseUsage => {
            "にんじんとキャベツ\n".into_response()
        }
    }
}
