//! Chatfront Core Domain
//!
//! This crate contains the domain layer of the chatfront chat front-end:
//! - Message and role types for the conversation history
//! - The normalized `ApiError` failure shape
//! - The `Responder` trait that both the HTTP transport and the mock
//!   responder implement
//! - The `ChatStore` conversation state machine consumed by a UI layer
//!
//! There is no network code here; transports live in `chatfront-client`.

pub mod error;
pub mod message;
pub mod responder;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{ApiError, ErrorKind};
pub use message::{ChatRole, Message};
pub use responder::Responder;
pub use store::{ChatStore, GREETING};
pub use types::{PromptRequest, PromptResponse};
