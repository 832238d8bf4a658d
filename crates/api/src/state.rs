use std::sync::Arc;

use folio_db::SubmissionStore;
use folio_notify::Notifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store and notifier are process-wide handles built
/// once in `main` and shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway (PostgreSQL pool in production).
    pub store: Arc<dyn SubmissionStore>,
    /// Notification gateway (SMTP transport in production).
    pub notifier: Arc<dyn Notifier>,
}
