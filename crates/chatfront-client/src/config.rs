//! Client configuration: base URL and the fixed request timeout.

use std::env;
use std::time::Duration;

/// Default base URL when none is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Fixed connect/response timeout for the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoint path for prompt submission.
pub const PROMPT_ENDPOINT: &str = "/prompt";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "CHATFRONT_API_URL";

/// Configuration for [`HttpResponder`](crate::HttpResponder).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without the endpoint path. A trailing `/`
    /// is trimmed on construction.
    pub base_url: String,
    /// Request timeout applied to every call.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `base_url` with the fixed default timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build the config from the environment, falling back to the
    /// default base URL when the override is unset.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(&url),
            _ => Self::default(),
        }
    }

    /// Full URL of the prompt endpoint.
    pub fn prompt_url(&self) -> String {
        format!("{}{}", self.base_url, PROMPT_ENDPOINT)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
