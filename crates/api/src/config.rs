use modelcat_sync::client::{dataset_url, DEFAULT_BRANCH};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where the canonical `models.json` is downloaded from.
    pub dataset_url: String,
    /// Fetch the dataset once before serving (default: `true`).
    pub sync_on_startup: bool,
    /// Largest accepted `models.json` upload in bytes (default: 8 MiB).
    pub max_import_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `DATASET_URL`          | upstream URL for `DATASET_BRANCH`|
    /// | `DATASET_BRANCH`       | `develop`                        |
    /// | `SYNC_ON_STARTUP`      | `true`                           |
    /// | `MAX_IMPORT_BYTES`     | `8388608`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let dataset_url = std::env::var("DATASET_URL").unwrap_or_else(|_| {
            let branch =
                std::env::var("DATASET_BRANCH").unwrap_or_else(|_| DEFAULT_BRANCH.into());
            dataset_url(&branch)
        });

        let sync_on_startup: bool = std::env::var("SYNC_ON_STARTUP")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SYNC_ON_STARTUP must be true or false");

        let max_import_bytes: usize = std::env::var("MAX_IMPORT_BYTES")
            .unwrap_or_else(|_| (8 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_IMPORT_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            dataset_url,
            sync_on_startup,
            max_import_bytes,
        }
    }
}
