//! Handlers for contact-form submissions.
//!
//! `POST /submit` validates, persists, then notifies, in that order. A failed
//! notification does not roll back the stored row.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use folio_core::submission::SubmissionForm;
use folio_db::models::submission::Submission;

use crate::error::{AppError, AppResult, MessageError};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Acknowledgment sent once the row is stored and the email is out.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted and email sent successfully!";

// ---------------------------------------------------------------------------
// POST /submit
// ---------------------------------------------------------------------------

/// Store a contact-form submission and email the site owner.
pub async fn create_submission(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionForm>, JsonRejection>,
) -> Result<Json<MessageResponse>, MessageError> {
    let Json(form) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let submission = form.validate()?;

    let id = state.store.insert(&submission).await?;
    tracing::info!(submission_id = id, "Submission stored");

    let message_id = state.notifier.notify(&submission).await.map_err(|e| {
        tracing::warn!(submission_id = id, "Submission stored but notification failed");
        e
    })?;
    tracing::info!(submission_id = id, message_id = %message_id, "Submission notification sent");

    Ok(Json(MessageResponse {
        message: SUBMIT_SUCCESS_MESSAGE,
    }))
}

// ---------------------------------------------------------------------------
// GET /submissions
// ---------------------------------------------------------------------------

/// List every stored submission, newest first.
pub async fn list_submissions(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    let submissions = state.store.list().await?;
    Ok(Json(submissions))
}
