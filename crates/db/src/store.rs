//! Storage seam used by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn SubmissionStore>` so the PostgreSQL-backed
//! [`PgSubmissionStore`] can be swapped for an in-memory double in tests.

use async_trait::async_trait;
use folio_core::submission::NewSubmission;
use folio_core::types::DbId;

use crate::models::submission::Submission;
use crate::repositories::SubmissionRepo;
use crate::DbPool;

#[async_trait]
pub trait SubmissionStore: Send + Sync + 'static {
    /// Persist a validated submission and return its generated ID.
    async fn insert(&self, submission: &NewSubmission) -> Result<DbId, sqlx::Error>;

    /// Return all submissions ordered by `submission_date` descending.
    async fn list(&self) -> Result<Vec<Submission>, sqlx::Error>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`SubmissionStore`] backed by the shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: DbPool,
}

impl PgSubmissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<DbId, sqlx::Error> {
        let id = SubmissionRepo::create(&self.pool, submission).await?;
        tracing::debug!(submission_id = id, "Submission row inserted");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Submission>, sqlx::Error> {
        SubmissionRepo::list(&self.pool).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
