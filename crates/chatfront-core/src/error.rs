//! Normalized API failure shape.

use serde_json::Value;
use thiserror::Error;

/// Normalized error produced by any responder, regardless of the
/// underlying failure cause (connection error, non-2xx status, decode
/// failure).
///
/// `status` is the observed HTTP status, or 0 when none was observable
/// (e.g. the connection never completed).
#[derive(Debug, Clone, Error)]
#[error("API error (status {status}): {message}")]
pub struct ApiError {
    /// HTTP status code, 0 if no status was observable.
    pub status: u16,
    /// Human-readable description, rendered to the end user as a
    /// conversational message.
    pub message: String,
    /// Opaque payload from the failed exchange (e.g. the response body).
    pub data: Option<Value>,
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network/connection failure, no status observed.
    Transport,
    /// 4xx response.
    Client,
    /// 5xx response or an unexpected failure.
    Server,
}

impl ApiError {
    /// Create an error with an observed status.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Create a transport-level error (no status observed).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    /// Create a client error (4xx).
    pub fn client(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, message)
    }

    /// Create a server error (5xx/unexpected).
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, message)
    }

    /// Attach an opaque payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Classify this error by its status.
    pub fn kind(&self) -> ErrorKind {
        match self.status {
            0 => ErrorKind::Transport,
            400..=499 => ErrorKind::Client,
            _ => ErrorKind::Server,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_classification() {
        assert_eq!(ApiError::transport("refused").kind(), ErrorKind::Transport);
        assert_eq!(ApiError::client(400, "bad").kind(), ErrorKind::Client);
        assert_eq!(ApiError::client(404, "missing").kind(), ErrorKind::Client);
        assert_eq!(ApiError::server(500, "boom").kind(), ErrorKind::Server);
        assert_eq!(ApiError::new(302, "odd").kind(), ErrorKind::Server);
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let err = ApiError::client(400, "Prompt cannot be empty");
        assert_eq!(
            err.to_string(),
            "API error (status 400): Prompt cannot be empty"
        );
    }

    #[test]
    fn test_with_data() {
        let err = ApiError::server(500, "boom").with_data(json!({"detail": "oops"}));
        assert_eq!(err.data, Some(json!({"detail": "oops"})));
    }
}
