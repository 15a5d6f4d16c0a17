//! The responder capability shared by the HTTP transport and the mock.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{PromptRequest, PromptResponse};

/// A backend that answers prompt submissions.
///
/// Implement this trait to plug a transport into [`ChatStore`]. Exactly
/// one logical outbound call per invocation; no retries, no caching.
/// Which implementation is wired in is decided once, at construction
/// time, by the composing application.
///
/// [`ChatStore`]: crate::store::ChatStore
#[async_trait]
pub trait Responder: Send + Sync {
    /// Submit a prompt and return the assistant's response.
    ///
    /// Every failure cause is normalized into an [`ApiError`].
    async fn send(&self, request: &PromptRequest) -> Result<PromptResponse, ApiError>;
}
