#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::submission::NewSubmission;
use folio_core::types::DbId;
use folio_db::models::submission::Submission;
use folio_db::SubmissionStore;
use folio_notify::{MailError, Notifier};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` serving static pages from `static_dir`.
pub fn test_config(static_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        static_dir,
    }
}

/// Build the full application router around the given gateways.
pub fn build_test_app(
    store: Arc<dyn SubmissionStore>,
    notifier: Arc<dyn Notifier>,
    static_dir: PathBuf,
) -> Router {
    let config = test_config(static_dir);
    let state = AppState { store, notifier };
    build_app_router(state, &config)
}

/// Router with the given doubles and a static directory that does not exist.
pub fn app_with(store: Arc<MemoryStore>, notifier: Arc<RecordingNotifier>) -> Router {
    build_test_app(store, notifier, PathBuf::from("/nonexistent-static-dir"))
}

// ---------------------------------------------------------------------------
// Gateway doubles
// ---------------------------------------------------------------------------

/// In-memory store that can be switched into an "unreachable" mode.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Submission>>,
    unreachable: bool,
}

impl MemoryStore {
    pub fn unreachable() -> Self {
        Self {
            rows: Mutex::default(),
            unreachable: true,
        }
    }

    pub fn rows(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }

    /// Seed a row with an explicit submission date.
    pub fn seed(&self, name: &str, date: &str) {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as DbId + 1;
        rows.push(Submission {
            id,
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            about: None,
            prompt: "hello".to_string(),
            submission_date: Some(
                chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap(),
            ),
        });
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<DbId, sqlx::Error> {
        if self.unreachable {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as DbId + 1;
        rows.push(Submission {
            id,
            name: submission.name.clone(),
            email: submission.email.clone(),
            about: submission.about.clone(),
            prompt: submission.prompt.clone(),
            submission_date: Some(chrono::Utc::now().naive_utc()),
        });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Submission>, sqlx::Error> {
        if self.unreachable {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut rows = self.rows();
        rows.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then(b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.unreachable {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

/// Notifier that records every attempt and optionally fails it.
#[derive(Default)]
pub struct RecordingNotifier {
    attempts: Mutex<Vec<NewSubmission>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            attempts: Mutex::default(),
            failing: true,
        }
    }

    pub fn attempts(&self) -> Vec<NewSubmission> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, submission: &NewSubmission) -> Result<String, MailError> {
        self.attempts.lock().unwrap().push(submission.clone());
        if self.failing {
            return Err(MailError::Build("relay rejected the message".to_string()));
        }
        Ok("<test-message@example.com>".to_string())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
