//! Assistant conversation messages
//!
//! Boundary entities for the AI collaborator: an append-only, ordered
//! message list kept per project and persisted through the
//! conversation store.

use serde::{Deserialize, Serialize};

/// Who authored a conversation message
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message in the per-project assistant conversation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConversationMessage {
    /// Message identifier, unique within the conversation
    pub id: String,

    /// Message body
    pub content: String,

    /// Author role
    pub role: MessageRole,

    /// RFC 3339 timestamp of when the message was appended
    pub timestamp: String,
}

impl ConversationMessage {
    /// Create a message stamped with the current time
    pub fn new(id: impl Into<String>, content: impl Into<String>, role: MessageRole) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            role,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
        let role: MessageRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, MessageRole::User);
    }

    #[test]
    fn test_message_round_trip() {
        let msg = ConversationMessage::new("m1", "Tighten the opening.", MessageRole::User);
        let json = serde_json::to_string(&msg).unwrap();
        let back: ConversationMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
