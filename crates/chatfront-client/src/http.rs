//! HTTP transport adapter for prompt submission.

use async_trait::async_trait;
use tracing::debug;

use chatfront_core::{ApiError, PromptRequest, PromptResponse, Responder};

use crate::config::ClientConfig;

/// Responder that performs one `POST /prompt` per send.
///
/// Every failure cause is normalized into [`ApiError`]: a connection
/// failure or timeout yields status 0, a non-2xx response yields its
/// status (with any parseable body attached as `data`), and a decode
/// failure after a 2xx yields the observed status. No retries, no
/// caching.
pub struct HttpResponder {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpResponder {
    /// Create a responder for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this responder was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn send(&self, request: &PromptRequest) -> Result<PromptResponse, ApiError> {
        let url = self.config.prompt_url();
        debug!(url = %url, "Submitting prompt");

        let response = self
            .inner
            .post(&url)
            .timeout(self.config.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Prompt submission rejected");
            let mut error = ApiError::new(
                status.as_u16(),
                format!("API responded with status: {}", status.as_u16()),
            );
            if let Ok(body) = response.json::<serde_json::Value>().await {
                error = error.with_data(body);
            }
            return Err(error);
        }

        response
            .json::<PromptResponse>()
            .await
            .map_err(|e| ApiError::new(status.as_u16(), e.to_string()))
    }
}
