//! Backend API abstraction for the Zuvigo chat service
//!
//! This module defines the `ChatBackend` trait the conversation controller
//! talks to, the wire types for both endpoints, and the reqwest-based
//! `BackendClient` implementation.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod client;

pub use client::BackendClient;

/// A single `{role, content}` pair sent as conversation history
///
/// The completion endpoint receives the prior transcript in this shape,
/// in order, with the synthetic welcome message excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role of the message sender (user or assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl ChatTurn {
    /// Creates a new history turn
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::backend::ChatTurn;
    ///
    /// let turn = ChatTurn::new("user", "Hello");
    /// assert_eq!(turn.role, "user");
    /// ```
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Backend service trait for the two outbound REST calls
///
/// The conversation controller depends on this trait rather than a concrete
/// HTTP client, so tests can substitute a scripted backend.
///
/// # Examples
///
/// ```no_run
/// use async_trait::async_trait;
/// use zuvigo_chat::backend::{ChatBackend, ChatTurn};
/// use zuvigo_chat::error::Result;
///
/// struct EchoBackend;
///
/// #[async_trait]
/// impl ChatBackend for EchoBackend {
///     async fn complete(&self, message: &str, _history: &[ChatTurn]) -> Result<String> {
///         Ok(format!("you said: {}", message))
///     }
///
///     async fn book_lead(&self, _name: &str, _email: &str) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Requests an assistant reply for a user message and the prior transcript
    ///
    /// # Arguments
    ///
    /// * `message` - The new user message text
    /// * `history` - Prior transcript as ordered `{role, content}` pairs,
    ///   excluding the synthetic welcome message
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response cannot be parsed, or
    /// the endpoint returns a non-success status
    async fn complete(&self, message: &str, history: &[ChatTurn]) -> Result<String>;

    /// Submits a captured lead to the lead-capture endpoint
    ///
    /// # Arguments
    ///
    /// * `name` - Captured visitor name
    /// * `email` - Captured visitor email
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the endpoint returns a
    /// non-success status; the response body is not inspected further
    async fn book_lead(&self, name: &str, email: &str) -> Result<()>;
}
