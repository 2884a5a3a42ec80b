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
    /// HTTP request timeout in seconds (default: `180`).
    ///
    /// The synchronous generation and edit paths wait on image generation,
    /// so this is much higher than a typical API timeout.
    pub request_timeout_secs: u64,
    /// How long a session stays in the store after creation (default: `3600`).
    pub session_ttl_secs: u64,
    /// How often the eviction sweeper runs (default: `300`).
    pub session_sweep_interval_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                    |
    /// |------------------------------|----------------------------|
    /// | `HOST`                       | `0.0.0.0`                  |
    /// | `PORT`                       | `3000`                     |
    /// | `CORS_ORIGINS`               | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`       | `180`                      |
    /// | `SESSION_TTL_SECS`           | `3600`                     |
    /// | `SESSION_SWEEP_INTERVAL_SECS`| `300`                      |
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
            .unwrap_or_else(|_| "180".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_ttl_secs: u64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid u64");

        let session_sweep_interval_secs: u64 = std::env::var("SESSION_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("SESSION_SWEEP_INTERVAL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_ttl_secs,
            session_sweep_interval_secs,
        }
    }
}
