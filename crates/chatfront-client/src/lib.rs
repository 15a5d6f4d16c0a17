//! Responder implementations for chatfront.
//!
//! Two interchangeable backends behind the [`Responder`] trait from
//! `chatfront-core`:
//! - [`HttpResponder`]: one `POST /prompt` per send against a configured
//!   base URL, every failure normalized into `ApiError`.
//! - [`MockResponder`]: canned responses with simulated latency for
//!   offline development and testing.
//!
//! The composing application picks one at startup via [`build_responder`]
//! (or by constructing either type directly) and hands it to
//! `ChatStore::new`.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chatfront_client::{build_responder, Backend, ClientConfig};
//! use chatfront_core::ChatStore;
//!
//! let responder = build_responder(Backend::Mock, ClientConfig::from_env());
//! let store = Arc::new(ChatStore::new(responder));
//! ```
//!
//! [`Responder`]: chatfront_core::Responder

mod backend;
mod config;
mod http;
mod mock;

// Re-export main types
pub use backend::{build_responder, Backend};
pub use config::ClientConfig;
pub use http::HttpResponder;
pub use mock::MockResponder;
