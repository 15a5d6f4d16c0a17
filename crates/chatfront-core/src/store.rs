//! Conversation store: message history plus the single-flight busy flag.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::message::{ChatRole, Message};
use crate::responder::Responder;
use crate::types::PromptRequest;

/// Greeting the history is seeded with, and reset to on clear.
pub const GREETING: &str = "Hello! How can I help you today?";

/// Shown in place of an error whose message is empty.
const ERROR_FALLBACK: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// Mutable conversation state guarded by the store.
struct ConversationState {
    history: Vec<Message>,
    busy: bool,
}

impl ConversationState {
    fn seeded() -> Self {
        Self {
            history: vec![Message::assistant(GREETING)],
            busy: false,
        }
    }
}

/// The conversation state machine consumed by a UI layer.
///
/// Holds the ordered message history and a busy flag that doubles as the
/// single-flight guard: while a prompt is outstanding, further sends are
/// dropped (not queued). The store is constructed once by the composing
/// application with the responder it should use, and shared by handle
/// (`Arc<ChatStore>`); reads through any handle observe the current state.
///
/// States: `Idle` (busy = false) and `AwaitingResponse` (busy = true).
/// A send moves the store to `AwaitingResponse`; it returns to `Idle`
/// only when the UI reports the response's reveal animation finished via
/// [`complete_animation`](ChatStore::complete_animation).
pub struct ChatStore {
    state: Mutex<ConversationState>,
    responder: Arc<dyn Responder>,
}

impl ChatStore {
    /// Create a store seeded with the greeting, wired to `responder`.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            state: Mutex::new(ConversationState::seeded()),
            responder,
        }
    }

    /// Submit a user message and append the responder's answer.
    ///
    /// No-op when `text` trims to empty or a request is already
    /// outstanding. On success the assistant's content is appended with
    /// the animating flag set; on failure the error's message (or a
    /// fixed fallback) is appended the same way. Either way the store
    /// stays busy until [`complete_animation`](ChatStore::complete_animation).
    pub async fn send_message(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.busy {
                debug!("Send dropped: request already in flight");
                return;
            }
            state.history.push(Message::user(text));
            state.busy = true;
        }

        let request = PromptRequest::new(text);
        let content = match self.responder.send(&request).await {
            Ok(response) => response.content,
            Err(e) => {
                warn!(status = e.status, error = %e, "Prompt submission failed");
                if e.message.is_empty() {
                    ERROR_FALLBACK.to_string()
                } else {
                    e.message
                }
            }
        };

        let mut state = self.state.lock().unwrap();
        state.history.push(Message::assistant_animating(content));
    }

    /// Mark the assistant message at `index` as done animating and
    /// return the store to `Idle`.
    ///
    /// Out-of-range indices and non-assistant messages are no-ops.
    pub fn complete_animation(&self, index: usize) {
        let mut state = self.state.lock().unwrap();
        match state.history.get_mut(index) {
            Some(message) if message.role == ChatRole::Assistant => {
                message.animating = false;
                state.busy = false;
            }
            _ => {}
        }
    }

    /// Reset the history to the seeded greeting.
    ///
    /// Leaves `busy` untouched: while a request is outstanding the flag
    /// is still the single-flight guard. A late response appends to the
    /// reseeded history and is released by the usual
    /// [`complete_animation`](ChatStore::complete_animation).
    pub fn clear_chat(&self) {
        let mut state = self.state.lock().unwrap();
        state.history = vec![Message::assistant(GREETING)];
        debug!("Chat history cleared");
    }

    /// Snapshot of the current history.
    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().unwrap().history.clone()
    }

    /// Whether a request is outstanding (or its response still animating).
    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().history.len()
    }

    /// True when the history is empty. Never the case in practice, since
    /// the history is seeded and clears back to the seed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
