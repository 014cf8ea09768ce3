#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tera::Tera;

use flash_lookup_web::{ui::templates, DictionaryClient};

/// Requests the mock dictionary received, as `endpoint:value`.
#[derive(Clone, Default)]
pub struct Hits(Arc<Mutex<Vec<String>>>);

impl Hits {
    fn record(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

type Params = Query<HashMap<String, String>>;

async fn mock_search(State(hits): State<Hits>, Query(params): Params) -> impl IntoResponse {
    let word = params.get("word").cloned().unwrap_or_default();
    hits.record(format!("search:{word}"));
    let body = match word.as_str() {
        "hello" | "Hello" | "test" => json!({
            "found": true,
            "word": "hello",
            "definition": "A greeting.\nUsed when meeting someone."
        }),
        "helo" => json!({ "found": false, "corrections": ["hello", "help", "hero"] }),
        "it's" => json!({ "found": true, "definition": "Contraction of it is & it has." }),
        _ => json!({ "found": false }),
    };
    Json(body)
}

async fn mock_suggestions(State(hits): State<Hits>, Query(params): Params) -> impl IntoResponse {
    let prefix = params.get("prefix").cloned().unwrap_or_default();
    hits.record(format!("suggestions:{prefix}"));
    let body: Vec<&str> = match prefix.as_str() {
        "hel" => vec!["hello", "help", "helmet"],
        "<b>" => vec!["<b>bold</b>"],
        _ => vec![],
    };
    Json(body)
}

async fn mock_corrections(State(hits): State<Hits>, Query(params): Params) -> impl IntoResponse {
    let word = params.get("word").cloned().unwrap_or_default();
    hits.record(format!("corrections:{word}"));
    let body: Vec<&str> = match word.as_str() {
        "helo" => vec!["hello", "halo"],
        _ => vec![],
    };
    Json(body)
}

async fn unavailable(State(hits): State<Hits>) -> impl IntoResponse {
    hits.record("unavailable".to_string());
    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "found": true, "definition": "ignored" })))
}

async fn garbage(State(hits): State<Hits>) -> impl IntoResponse {
    hits.record("garbage".to_string());
    "this is not json"
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// A working dictionary service; returns its base URL.
pub async fn spawn_mock_dictionary(hits: Hits) -> String {
    let app = Router::new()
        .route("/api/search", get(mock_search))
        .route("/api/suggestions", get(mock_suggestions))
        .route("/api/corrections", get(mock_corrections))
        .with_state(hits);
    serve(app).await
}

/// A service answering every endpoint with 503.
pub async fn spawn_unavailable_dictionary(hits: Hits) -> String {
    let app = Router::new().fallback(unavailable).with_state(hits);
    serve(app).await
}

/// A service answering 200 with a body that is not JSON.
pub async fn spawn_garbage_dictionary(hits: Hits) -> String {
    let app = Router::new().fallback(garbage).with_state(hits);
    serve(app).await
}

pub fn client(base_url: &str) -> DictionaryClient {
    DictionaryClient::new(base_url, 5_000).unwrap()
}

pub fn test_templates() -> Tera {
    templates::load(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap()
}

pub fn count_entries(html: &str) -> usize {
    html.matches("class=\"suggestion\"").count()
}
