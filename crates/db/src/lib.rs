//! PostgreSQL persistence for contact-form submissions.
//!
//! A single [`DbPool`] is created at startup with [`create_pool`] and shared
//! for the lifetime of the process. [`initialize`] idempotently creates the
//! `submissions` table; every other query goes through
//! [`repositories::SubmissionRepo`] or the [`store::SubmissionStore`] seam.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{PgSubmissionStore, SubmissionStore};

pub type DbPool = sqlx::PgPool;

/// Default upper bound on physical connections held by the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Schema of the only table this service owns.
const CREATE_SUBMISSIONS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS submissions ( \
        id SERIAL PRIMARY KEY, \
        name TEXT NOT NULL, \
        email TEXT NOT NULL, \
        about TEXT, \
        prompt TEXT NOT NULL, \
        submission_date TIMESTAMP DEFAULT NOW() \
    )";

/// Connection settings for the submissions database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Connection string. When `None`, the `PG*` environment defaults apply.
    pub url: Option<String>,
    /// TLS mode; `require` encrypts without verifying the server certificate.
    pub ssl_mode: PgSslMode,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                   | Default   |
    /// |----------------------------|-----------|
    /// | `DATABASE_URL`             | —         |
    /// | `DATABASE_SSL_MODE`        | `require` |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`      |
    pub fn from_env() -> Self {
        let ssl_mode = match std::env::var("DATABASE_SSL_MODE") {
            Ok(raw) => PgSslMode::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Unknown DATABASE_SSL_MODE, using require");
                PgSslMode::Require
            }),
            Err(_) => PgSslMode::Require,
        };

        Self {
            url: std::env::var("DATABASE_URL").ok(),
            ssl_mode,
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Build connect options, applying the configured TLS mode on top of the URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)?,
            None => PgConnectOptions::new(),
        };
        Ok(options.ssl_mode(self.ssl_mode))
    }
}

/// Create the shared connection pool.
///
/// Connections are opened on first use, so an unreachable database does not
/// prevent the process from starting. A malformed connection string is logged
/// and replaced by the `PG*` environment defaults; storage requests then fail
/// while the rest of the server keeps running.
pub fn create_pool(config: &DbConfig) -> DbPool {
    let options = config.connect_options().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid DATABASE_URL, falling back to PG* defaults");
        PgConnectOptions::new().ssl_mode(config.ssl_mode)
    });
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options)
}

/// Verify that a connection can be checked out and used.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the `submissions` table exists. Safe to call repeatedly.
pub async fn initialize(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_SUBMISSIONS_TABLE).execute(pool).await?;
    Ok(())
}
