//! Mock task endpoint for testing the HTTP source.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// How the mock endpoint answers.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// JSON array of `{"id", "title", "completed"}` items, honouring `_limit`.
    Todos(Vec<String>),
    /// Raw body with status 200.
    Raw(String),
    /// Empty body with this status.
    Status(u16),
    /// Sleep before answering with an empty array.
    Delay(Duration),
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockServer {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockServer {
    pub async fn start(reply: MockReply) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            queries: Arc::clone(&queries),
        };
        let router = Router::new()
            .route("/todos", get(handle_todos))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock server failed");
        });

        Self { addr, queries }
    }

    pub fn url(&self) -> String {
        format!("http://{}/todos", self.addr)
    }

    /// Query strings received so far.
    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().await.clone()
    }
}

async fn handle_todos(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let limit = query
        .get("_limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(usize::MAX);
    state.queries.lock().await.push(query);

    match state.reply {
        MockReply::Todos(titles) => {
            let items: Vec<serde_json::Value> = titles
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, title)| {
                    serde_json::json!({
                        "userId": 1,
                        "id": i + 1,
                        "title": title,
                        "completed": false
                    })
                })
                .collect();
            json_response(StatusCode::OK, serde_json::Value::Array(items).to_string())
        }
        MockReply::Raw(body) => json_response(StatusCode::OK, body),
        MockReply::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            status.into_response()
        }
        MockReply::Delay(delay) => {
            tokio::time::sleep(delay).await;
            json_response(StatusCode::OK, "[]".to_string())
        }
    }
}

fn json_response(status: StatusCode, body: String) -> axum::response::Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
