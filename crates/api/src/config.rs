use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// Empty means same-origin only.
    pub cors_origins: Vec<String>,
    /// Directory holding `index.html` and `submissions.html`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default   |
    /// |----------------|-----------|
    /// | `HOST`         | `0.0.0.0` |
    /// | `PORT`         | `3000`    |
    /// | `CORS_ORIGINS` | (none)    |
    /// | `STATIC_DIR`   | `public`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default());

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Self {
            host,
            port,
            cors_origins,
            static_dir,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
