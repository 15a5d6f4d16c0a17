//! Explicit backend selection, decided once at composition time.

use std::sync::Arc;

use chatfront_core::Responder;

use crate::config::ClientConfig;
use crate::http::HttpResponder;
use crate::mock::MockResponder;

/// Which responder implementation to wire into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Real HTTP transport against the configured base URL.
    Http,
    /// Offline canned responder.
    Mock,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Http => "http",
            Backend::Mock => "mock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "http" => Some(Backend::Http),
            "mock" => Some(Backend::Mock),
            _ => None,
        }
    }

    pub fn all() -> Vec<Backend> {
        vec![Backend::Http, Backend::Mock]
    }
}

/// Construct the chosen responder.
///
/// The store never branches on the backend at runtime; the selection
/// happens here, once, and the store only ever sees the trait object.
pub fn build_responder(backend: Backend, config: ClientConfig) -> Arc<dyn Responder> {
    match backend {
        Backend::Http => Arc::new(HttpResponder::new(config)),
        Backend::Mock => Arc::new(MockResponder::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chatfront_core::PromptRequest;

    #[test]
    fn test_backend_name_round_trip() {
        for backend in Backend::all() {
            assert_eq!(Backend::from_str(backend.as_str()), Some(backend));
        }
        assert_eq!(Backend::from_str("MOCK"), Some(Backend::Mock));
        assert_eq!(Backend::from_str("grpc"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_build_mock_responder_answers() {
        let responder = build_responder(Backend::Mock, ClientConfig::default());
        let response = responder.send(&PromptRequest::new("hi")).await.unwrap();
        assert!(!response.content.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_round_trip_through_mock() {
        use chatfront_core::{ChatRole, ChatStore};

        use crate::mock::CANNED_RESPONSES;

        let store = ChatStore::new(build_responder(Backend::Mock, ClientConfig::default()));
        store.send_message("hi").await;

        let messages = store.messages();
        let reply = messages.last().unwrap();
        assert_eq!(reply.role, ChatRole::Assistant);
        assert!(reply.animating);
        assert!(CANNED_RESPONSES.contains(&reply.content.as_str()));
    }
}
