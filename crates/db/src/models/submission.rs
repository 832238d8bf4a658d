//! Submission entity model.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub about: Option<String>,
    pub prompt: String,
    pub submission_date: Option<Timestamp>,
}
