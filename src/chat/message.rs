//! Message types for the chat transcript
//!
//! This module defines the message record stored in the conversation
//! transcript, along with constructors for the two roles and the synthetic
//! welcome message that seeds every new conversation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the synthetic welcome message
///
/// The welcome message opens every fresh conversation and is never sent to
/// the backend as conversation history.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

/// Text of the synthetic welcome message
pub const WELCOME_TEXT: &str = "Hi! \u{1F44B} I'm Zuvigo's AI assistant. How can I help you today?";

/// Fallback assistant reply shown when the completion endpoint is unreachable
/// or returns a non-success response
pub const FALLBACK_TEXT: &str = "Sorry, I'm having trouble connecting. Please try again or contact us directly at hello@zuvigo.com";

/// A single message in the conversation transcript
///
/// Messages carry a unique id, a role (`user` or `assistant`), and the text
/// content. The transcript is append-only during a session and is persisted
/// as a whole snapshot after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier within the session
    pub id: String,
    /// Role of the message sender (user or assistant)
    pub role: String,
    /// Text content of the message
    pub content: String,
}

impl Message {
    /// Creates a new user message with a freshly generated unique id
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::chat::Message;
    ///
    /// let msg = Message::user("Hello!");
    /// assert_eq!(msg.role, "user");
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant message with a freshly generated unique id
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::chat::Message;
    ///
    /// let msg = Message::assistant("Hi there!");
    /// assert_eq!(msg.role, "assistant");
    /// ```
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// Creates the synthetic welcome message that opens a new conversation
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::chat::{Message, WELCOME_MESSAGE_ID};
    ///
    /// let msg = Message::welcome();
    /// assert_eq!(msg.id, WELCOME_MESSAGE_ID);
    /// assert_eq!(msg.role, "assistant");
    /// ```
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            role: "assistant".to_string(),
            content: WELCOME_TEXT.to_string(),
        }
    }

    /// Returns true if this message was sent by the user
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }

    /// Returns true if this message was sent by the assistant
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}
