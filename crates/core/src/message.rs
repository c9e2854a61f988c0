//! Message domain types.
//!
//! These are the value objects sent to the language-model service: the
//! persona prompt, the member's question, and assembled tool results all
//! travel as messages. Tool dispatch itself is deterministic and owned by
//! the router, so messages carry text only — there is no tool-call
//! plumbing on the wire. Queries are independent; no conversation state
//! is kept between them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role of a message sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The library member
    User,
    /// The assistant
    Assistant,
    /// System instructions (persona, gatekeeper rules)
    System,
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: String,

    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = Message::user("Do you have Dune?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Do you have Dune?");
    }

    #[test]
    fn messages_get_distinct_ids() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = Message::system("You are a library assistant.");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.content, msg.content);
        assert_eq!(back.role, Role::System);
    }
}
