use std::env;

use crate::config::ConfigError;

/// Configuration for the site-side data fetcher. Passed explicitly to
/// `ApiClient::new` so the fetcher never reads ambient environment itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Convenience constructor reading `BACKEND_URL`, for the cases where the
    /// caller wants the environment-driven default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("BACKEND_URL")
            .map_err(|_| ConfigError::EnvVarNotFound("BACKEND_URL".to_string()))?;
        Ok(Self::new(base_url))
    }
}
