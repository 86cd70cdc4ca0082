//! Backend connection settings.

use std::time::Duration;

/// Connection settings for the reservations backend.
///
/// Defaults target a local backend; every field can be overridden through
/// environment variables:
///
/// | variable                      | field             |
/// |-------------------------------|-------------------|
/// | `TAVOLA_BACKEND_URL`          | `backend_api_url` |
/// | `TAVOLA_BACKEND_TIMEOUT_SECS` | `timeout_secs`    |
/// | `TAVOLA_BACKEND_API_KEY`      | `api_key`         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the backend REST API.
    pub backend_api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional API key sent as `X-API-Key`.
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_api_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
            api_key: None,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_api_url: std::env::var("TAVOLA_BACKEND_URL")
                .unwrap_or(defaults.backend_api_url),
            timeout_secs: std::env::var("TAVOLA_BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            api_key: std::env::var("TAVOLA_BACKEND_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
