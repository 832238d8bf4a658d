//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgment returned by the contact form endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
