use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::{DbConfig, PgSubmissionStore};
use folio_notify::{DisabledNotifier, MailConfig, Notifier, SmtpMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio_api=debug,folio_db=debug,folio_notify=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Both sqlx and lettre negotiate TLS through rustls.
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        static_dir = %config.static_dir.display(),
        "Loaded server configuration",
    );

    // --- Database ---
    let db_config = DbConfig::from_env();
    let pool = folio_db::create_pool(&db_config);
    tracing::info!(ssl_mode = ?db_config.ssl_mode, "Database connection pool created");

    // Storage requests fail until the table exists, but static pages keep working.
    match folio_db::initialize(&pool).await {
        Ok(()) => tracing::info!("Submissions table ready"),
        Err(e) => tracing::error!(error = %e, "Failed to initialize submissions table"),
    }

    // --- Email ---
    let notifier: Arc<dyn Notifier> = match MailConfig::from_env() {
        Some(mail_config) => {
            let host = mail_config.smtp_host.clone();
            match SmtpMailer::new(mail_config) {
                Ok(mailer) => {
                    tracing::info!(smtp_host = %host, "SMTP transport configured");
                    Arc::new(mailer)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Invalid email configuration, notifications disabled");
                    Arc::new(DisabledNotifier)
                }
            }
        }
        None => {
            tracing::warn!("EMAIL_USER/EMAIL_PASS not set, notifications disabled");
            Arc::new(DisabledNotifier)
        }
    };

    // --- App state ---
    let state = AppState {
        store: Arc::new(PgSubmissionStore::new(pool)),
        notifier,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
