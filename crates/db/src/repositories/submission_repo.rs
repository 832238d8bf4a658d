//! Repository for the `submissions` table.

use folio_core::submission::NewSubmission;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::Submission;

/// Column list for `submissions` queries.
const COLUMNS: &str = "id, name, email, about, prompt, submission_date";

/// Insert and list operations for contact-form submissions.
///
/// Rows are never updated or deleted.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a submission, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &NewSubmission) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO submissions (name, email, about, prompt) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.about)
        .bind(&input.prompt)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// List every submission, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             ORDER BY submission_date DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }
}
