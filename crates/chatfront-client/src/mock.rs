//! Offline mock responder with canned responses and simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::debug;

use chatfront_core::{ApiError, PromptRequest, PromptResponse, Responder};

/// Simulated network latency before each mock response.
pub const MOCK_LATENCY: Duration = Duration::from_secs(1);

/// Canned replies the mock draws from, uniformly at random.
pub const CANNED_RESPONSES: [&str; 5] = [
    "I'm an AI assistant designed to help answer your questions.",
    "That's an interesting question. Let me think about it...",
    "I can help you with coding, general knowledge, and creative tasks.",
    "Is there anything specific you'd like to learn more about?",
    "I'm here to assist with whatever you need help with.",
];

/// Responder that simulates the transport contract without network I/O.
///
/// Honors the same error policy a real backend would apply to an empty
/// prompt, so the store's failure path is exercisable offline.
#[derive(Debug, Default)]
pub struct MockResponder;

impl MockResponder {
    /// Create a new mock responder.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn send(&self, request: &PromptRequest) -> Result<PromptResponse, ApiError> {
        tokio::time::sleep(MOCK_LATENCY).await;

        if request.prompt.trim().is_empty() {
            return Err(ApiError::client(400, "Prompt cannot be empty"));
        }

        let content = CANNED_RESPONSES
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| ApiError::server(500, "Mock API error"))?;
        debug!(len = content.len(), "Mock responder replying");

        Ok(PromptResponse {
            content: (*content).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chatfront_core::ErrorKind;

    #[tokio::test(start_paused = true)]
    async fn test_replies_from_canned_set() {
        let responder = MockResponder::new();
        let response = responder
            .send(&PromptRequest::new("Hello, AI!"))
            .await
            .unwrap();
        assert!(CANNED_RESPONSES.contains(&response.content.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let responder = MockResponder::new();
        let start = tokio::time::Instant::now();
        responder.send(&PromptRequest::new("hi")).await.unwrap();
        assert!(start.elapsed() >= MOCK_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_prompt_is_rejected() {
        let responder = MockResponder::new();
        for prompt in ["", "   ", "\t\n"] {
            let err = responder
                .send(&PromptRequest::new(prompt))
                .await
                .expect_err("empty prompt should fail");
            assert_eq!(err.status, 400);
            assert_eq!(err.message, "Prompt cannot be empty");
            assert_eq!(err.kind(), ErrorKind::Client);
        }
    }
}
