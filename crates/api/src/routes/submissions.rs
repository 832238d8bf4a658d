//! Route definitions for contact-form submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Submission routes.
///
/// ```text
/// POST   /submit          -> create_submission
/// GET    /submissions     -> list_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submissions::create_submission))
        .route("/submissions", get(submissions::list_submissions))
}
