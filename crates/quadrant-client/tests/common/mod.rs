//! In-process stand-in for the sales agent backend.
//!
//! Serves both route layouts from one listener on `127.0.0.1:0` and keeps
//! everything in memory. Every JSON body received is recorded so tests can
//! assert on the exact wire shape.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

#[derive(Default)]
pub struct Store {
    pub bookmarks: Vec<Value>,
    pub enhanced: Vec<Value>,
    next_id: i64,
    /// `(path, body)` of every JSON request, in arrival order.
    pub received: Vec<(String, Value)>,
}

type Shared = Arc<Mutex<Store>>;

pub struct MockBackend {
    pub base_url: String,
    pub store: Shared,
}

impl MockBackend {
    pub fn last_body(&self, path: &str) -> Option<Value> {
        self.store
            .lock()
            .unwrap()
            .received
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }

    pub fn enhanced_ids(&self) -> Vec<i64> {
        self.store
            .lock()
            .unwrap()
            .enhanced
            .iter()
            .filter_map(|b| b["id"].as_i64())
            .collect()
    }
}

pub async fn spawn() -> MockBackend {
    let store = Shared::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(store.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        store,
    }
}

fn router(store: Shared) -> Router {
    Router::new()
        // canonical layout
        .route("/projects/hunt", post(hunt))
        .route("/projects/analyze-company", post(analyze))
        .route("/sales/email", post(send_email))
        .route("/projects/bookmark", post(add_bookmark))
        .route("/projects/bookmarks", get(list_bookmarks))
        .route("/projects/hunt/bookmark", post(add_hunt_bookmark))
        .route("/projects/analyze-company/bookmark", post(add_analysis_bookmark))
        .route("/projects/bookmarks/enhanced", get(list_enhanced))
        .route("/projects/bookmarks/{id}", axum::routing::delete(delete_enhanced))
        .route("/projects/bookmarks/{id}/download", get(download))
        .route("/projects/chat", post(chat))
        .route("/projects/chat/enhanced", post(chat))
        // legacy layout
        .route("/hunt/projects", post(hunt))
        .route("/email/generate", post(generate_email))
        .route("/bookmarks/list", get(list_bookmarks_wrapped))
        .route("/bookmarks/company/{name}", get(bookmark_by_company))
        .route("/bookmarks/enhanced/list", get(list_enhanced))
        .route(
            "/bookmarks/enhanced/{id}",
            get(get_enhanced).delete(delete_enhanced),
        )
        .route("/documents/{report_type}/download/{id}", get(download_typed))
        .route("/chat", post(chat))
        // misbehaving endpoints
        .route("/broken", get(broken))
        .route("/garbled", get(garbled))
        .route("/slow", get(slow))
        .with_state(store)
}

fn record(store: &Shared, path: &str, body: &Value) {
    store
        .lock()
        .unwrap()
        .received
        .push((path.to_string(), body.clone()));
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn hunt(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&store, "/projects/hunt", &body);
    let domain = body["domain_focus"].as_str().unwrap_or_default();
    Json(json!({
        "domain_focus": domain,
        "location": body.get("location"),
        "industry": body.get("industry"),
        "opportunities_report": format!("## Opportunities in {domain}\n\n1. Migration work"),
    }))
    .into_response()
}

async fn analyze(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&store, "/projects/analyze-company", &body);
    let Some(company) = body["company_name"].as_str() else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "company_name is required");
    };
    Json(json!({
        "company_name": company,
        "industry": "Logistics",
        "location": "Berlin",
        "readiness_analysis": format!("{company} is ready for outreach."),
    }))
    .into_response()
}

async fn send_email(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&store, "/sales/email", &body);
    Json(json!({ "status": "sent", "message": "Email queued" })).into_response()
}

async fn generate_email(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&store, "/email/generate", &body);
    let company = body["company"].as_str().unwrap_or_default();
    Json(json!({
        "subject": format!("Working with {company}"),
        "body": "Hello",
    }))
    .into_response()
}

async fn add_bookmark(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&store, "/projects/bookmark", &body);
    let mut guard = store.lock().unwrap();
    guard.next_id += 1;
    let id = guard.next_id;
    let mut saved = body;
    saved["id"] = json!(id);
    guard.bookmarks.push(saved);
    Json(json!({ "id": id, "status": "success" })).into_response()
}

fn filter_added_by(items: &[Value], params: &HashMap<String, String>) -> Vec<Value> {
    items
        .iter()
        .filter(|b| {
            params
                .get("added_by")
                .is_none_or(|who| b["added_by"].as_str() == Some(who.as_str()))
        })
        .cloned()
        .collect()
}

async fn list_bookmarks(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let guard = store.lock().unwrap();
    Json(Value::Array(filter_added_by(&guard.bookmarks, &params))).into_response()
}

async fn list_bookmarks_wrapped(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let guard = store.lock().unwrap();
    Json(json!({ "bookmarks": filter_added_by(&guard.bookmarks, &params) })).into_response()
}

async fn bookmark_by_company(State(store): State<Shared>, Path(name): Path<String>) -> Response {
    let guard = store.lock().unwrap();
    guard
        .bookmarks
        .iter()
        .find(|b| b["company_name"].as_str() == Some(name.as_str()))
        .map_or_else(
            || detail(StatusCode::NOT_FOUND, "Bookmark not found"),
            |b| Json(b.clone()).into_response(),
        )
}

fn save_enhanced(store: &Shared, path: &str, report_type: &str, body: Value) -> Response {
    record(store, path, &body);
    let mut guard = store.lock().unwrap();
    guard.next_id += 1;
    let id = guard.next_id;
    let mut saved = body;
    saved["id"] = json!(id);
    saved["report_type"] = json!(report_type);
    saved["created_at"] = json!("2026-10-16T09:00:00Z");
    guard.enhanced.push(saved);
    Json(json!({ "id": id, "status": "success", "message": "Bookmark saved" })).into_response()
}

async fn add_hunt_bookmark(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    save_enhanced(&store, "/projects/hunt/bookmark", "hunt", body)
}

async fn add_analysis_bookmark(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    save_enhanced(&store, "/projects/analyze-company/bookmark", "analysis", body)
}

async fn list_enhanced(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let guard = store.lock().unwrap();
    let bookmarks: Vec<Value> = filter_added_by(&guard.enhanced, &params)
        .into_iter()
        .filter(|b| {
            params
                .get("report_type")
                .is_none_or(|t| b["report_type"].as_str() == Some(t.as_str()))
        })
        .collect();
    Json(json!({ "bookmarks": bookmarks })).into_response()
}

fn find_enhanced(store: &Shared, id: i64) -> Option<Value> {
    store
        .lock()
        .unwrap()
        .enhanced
        .iter()
        .find(|b| b["id"].as_i64() == Some(id))
        .cloned()
}

async fn get_enhanced(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    find_enhanced(&store, id).map_or_else(
        || detail(StatusCode::NOT_FOUND, "Bookmark not found"),
        |b| Json(b).into_response(),
    )
}

async fn delete_enhanced(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut guard = store.lock().unwrap();
    let before = guard.enhanced.len();
    guard.enhanced.retain(|b| b["id"].as_i64() != Some(id));
    if guard.enhanced.len() == before {
        return detail(StatusCode::NOT_FOUND, "Bookmark not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

fn document_for(bookmark: &Value) -> Response {
    let name = format!(
        "{}_{}_report.docx",
        bookmark["company_name"].as_str().unwrap_or_default(),
        bookmark["report_type"].as_str().unwrap_or_default(),
    );
    (
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        b"PK\x03\x04docx".to_vec(),
    )
        .into_response()
}

async fn download(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    find_enhanced(&store, id).map_or_else(
        || detail(StatusCode::NOT_FOUND, "Bookmark not found"),
        |b| document_for(&b),
    )
}

async fn download_typed(
    State(store): State<Shared>,
    Path((report_type, id)): Path<(String, i64)>,
) -> Response {
    match find_enhanced(&store, id) {
        Some(b) if b["report_type"].as_str() == Some(report_type.as_str()) => document_for(&b),
        _ => detail(StatusCode::NOT_FOUND, "Report not found"),
    }
}

async fn chat(State(store): State<Shared>, uri: axum::http::Uri, Json(body): Json<Value>) -> Response {
    record(&store, uri.path(), &body);
    let subject = body["company_name"]
        .as_str()
        .or_else(|| body["context"].as_str())
        .unwrap_or("your pipeline");
    Json(json!({ "response": format!("Here is what I know about {subject}.") })).into_response()
}

async fn broken() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

async fn garbled() -> Response {
    (StatusCode::OK, "<html>not json</html>").into_response()
}

async fn slow() -> Response {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({})).into_response()
}
