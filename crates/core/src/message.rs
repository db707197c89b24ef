//! Conversation message types.
//!
//! These are the value objects that flow through the routing engine:
//! the caller supplies a message plus its own copy of the conversation
//! history each request. Nothing here is ever persisted by the engine.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI assistant
    Assistant,
    /// Persona/instruction turn (prepended by the window builder; callers
    /// never supply system messages)
    System,
}

/// A single turn of caller-supplied conversation history.
///
/// Immutable once created. The engine borrows the caller's history and never
/// mutates or retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Who sent this message
    pub role: Role,

    /// The text content (non-empty, trimmed by the caller)
    pub text: String,
}

impl ConversationMessage {
    /// Create a new user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// One role-tagged turn of the prompt sequence sent to the generation
/// provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTurn {
    /// Who speaks this turn
    pub role: Role,

    /// The turn content
    pub content: String,
}

impl PromptTurn {
    /// Create a system (persona/instruction) turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

impl From<&ConversationMessage> for PromptTurn {
    fn from(msg: &ConversationMessage) -> Self {
        Self {
            role: msg.role,
            content: msg.text.clone(),
        }
    }
}
