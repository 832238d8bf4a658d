use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_notify::MailError;
use serde_json::json;

/// Client-facing message for any server-side failure.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Client-facing message when `POST /submit` fails server-side.
pub const SUBMIT_FAILED_MESSAGE: &str = "Error submitting form";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the storage and delivery
/// failures of the two gateways. Implements [`IntoResponse`] to produce
/// `{ "error", "code" }` JSON; technical detail is logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The notification email could not be sent.
    #[error("Delivery error: {0}")]
    Delivery(#[from] MailError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify into HTTP status, error code and client-safe message.
    ///
    /// Server-side failures are logged here with their full detail.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
            AppError::Delivery(err) => {
                tracing::error!(error = %err, "Email delivery error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DELIVERY_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// [`AppError`] rendered with the `{ "message" }` envelope of the contact form.
///
/// Client errors keep their message; server errors collapse to
/// [`SUBMIT_FAILED_MESSAGE`].
#[derive(Debug)]
pub struct MessageError(pub AppError);

impl From<AppError> for MessageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for MessageError {
    fn from(err: CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl From<sqlx::Error> for MessageError {
    fn from(err: sqlx::Error) -> Self {
        Self(AppError::Database(err))
    }
}

impl From<MailError> for MessageError {
    fn from(err: MailError) -> Self {
        Self(AppError::Delivery(err))
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.classify();
        let message = if status.is_server_error() {
            SUBMIT_FAILED_MESSAGE.to_string()
        } else {
            message
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}
