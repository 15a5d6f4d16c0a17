//! Request/response wire types for prompt submission.
//!
//! These are transient values: built for one exchange and not retained
//! after the call completes.

use serde::{Deserialize, Serialize};

/// Body of a prompt submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// The prompt text. Arbitrary; responders do not validate it beyond
    /// their own stated policy.
    pub prompt: String,
}

impl PromptRequest {
    /// Create a new prompt request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Successful response to a prompt submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    /// Assistant-generated content.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let json = serde_json::to_string(&PromptRequest::new("hi")).unwrap();
        assert_eq!(json, r#"{"prompt":"hi"}"#);
    }

    #[test]
    fn test_response_wire_shape() {
        let response: PromptResponse = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert_eq!(response.content, "hello");
    }
}
