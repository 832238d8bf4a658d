//! Static pages served from the configured directory.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// Contact form page, served at `/`.
pub const INDEX_FILE: &str = "index.html";

/// Submissions dashboard page.
pub const DASHBOARD_FILE: &str = "submissions.html";

/// Mount the two static pages. A missing file yields 404.
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(INDEX_FILE)))
        .route_service(
            &format!("/{DASHBOARD_FILE}"),
            ServeFile::new(static_dir.join(DASHBOARD_FILE)),
        )
}
