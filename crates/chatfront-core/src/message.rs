//! Chat message types for the conversation history.

use serde::{Deserialize, Serialize};

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// User message (input/prompt).
    User,
    /// Assistant message (response).
    Assistant,
}

/// A message in the conversation history.
///
/// History is append-only: entries are never reordered or removed except
/// by a full reset back to the seeded greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of this message.
    pub role: ChatRole,
    /// Message content.
    pub content: String,
    /// Transient display flag: true only for the most recently appended
    /// assistant message, until the UI layer reports its reveal animation
    /// finished.
    #[serde(default, skip_serializing_if = "is_false")]
    pub animating: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

impl Message {
    /// Create a new message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            animating: false,
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Create an assistant message with the animating flag set.
    pub fn assistant_animating(content: impl Into<String>) -> Self {
        Self {
            animating: true,
            ..Self::assistant(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_constructors() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, ChatRole::User);
        assert!(!msg.animating);

        let msg = Message::assistant_animating("hi there");
        assert_eq!(msg.role, ChatRole::Assistant);
        assert!(msg.animating);
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);

        let json = serde_json::to_string(&Message::assistant_animating("yo")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"yo","animating":true}"#);
    }

    #[test]
    fn test_animating_defaults_false_on_deserialize() {
        let msg: Message = serde_json::from_str(r#"{"role":"assistant","content":"x"}"#).unwrap();
        assert!(!msg.animating);
    }
}
