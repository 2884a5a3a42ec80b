/// fal.ai client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct FalConfig {
    /// Base URL of the fal.ai synchronous REST gateway.
    pub base_url: String,
    /// API key. `None` means unauthenticated; calls will be rejected by
    /// the provider, and the health endpoint reports the gap.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds. Image generation is slow; the
    /// default is deliberately generous.
    pub timeout_secs: u64,
}

impl FalConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default              |
    /// |--------------------|----------------------|
    /// | `FAL_API_BASE`     | `https://fal.run`    |
    /// | `FAL_KEY`          | (unset)              |
    /// | `FAL_TIMEOUT_SECS` | `120`                |
    pub fn from_env() -> Self {
        let base_url = std::env::var("FAL_API_BASE")
            .unwrap_or_else(|_| "https://fal.run".into())
            .trim_end_matches('/')
            .to_string();

        let api_key = std::env::var("FAL_KEY").ok().filter(|k| !k.is_empty());

        let timeout_secs: u64 = std::env::var("FAL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("FAL_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            api_key,
            timeout_secs,
        }
    }
}
