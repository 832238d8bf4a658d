pub mod health;
pub mod pages;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the JSON API route tree.
///
/// ```text
/// POST   /submit          create a submission, then email the owner
/// GET    /submissions     list submissions, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(submissions::router())
}
