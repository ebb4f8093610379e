//! Conversation controller for the chat client
//!
//! This module implements the single-conversation state machine: it owns the
//! transcript, the staged input buffer, and the loading flag, relays user
//! turns to the completion endpoint, applies the lead-capture heuristics, and
//! submits a captured lead to the backend exactly once.
//!
//! # Persistence
//!
//! Every state mutation is written through to the profile store immediately:
//! the transcript as a whole snapshot, the lead fields independently. A fresh
//! session restores all of it, so a conversation survives restarts until the
//! profile is cleared.
//!
//! # Failure handling
//!
//! Completion failures never escape to the caller; they become a fixed
//! fallback assistant message and a diagnostic log line, and the loading flag
//! is dropped on both paths. Lead submission failures are logged and leave
//! the submitted flag false, so a later detection may retry.

use crate::backend::{ChatBackend, ChatTurn};
use crate::chat::capture;
use crate::chat::message::{Message, FALLBACK_TEXT};
use crate::error::Result;
use crate::storage::ProfileStore;
use std::sync::Arc;

/// Captured lead contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadState {
    /// Visitor name, captured when the assistant asked for it
    pub name: Option<String>,
    /// Visitor email, captured from an email-shaped substring
    pub email: Option<String>,
    /// Whether the lead was already submitted to the backend
    pub submitted: bool,
}

impl LeadState {
    /// Returns true if both contact fields are known
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.email.is_some()
    }
}

/// Result of submitting a user turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was empty/whitespace or a request was already in flight
    Ignored,
    /// A user message was appended and an assistant message (reply or
    /// fallback) followed it
    Replied,
}

/// Single-conversation controller
///
/// Holds the message list, input buffer, and loading flag; persists state to
/// the profile store on every change; calls the completion endpoint for each
/// user turn and the lead-capture endpoint at most once per captured lead.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use zuvigo_chat::backend::BackendClient;
/// use zuvigo_chat::chat::ChatSession;
/// use zuvigo_chat::config::BackendConfig;
/// use zuvigo_chat::storage::ProfileStore;
///
/// # async fn example() -> zuvigo_chat::error::Result<()> {
/// let backend = Arc::new(BackendClient::new(BackendConfig::default())?);
/// let store = ProfileStore::new()?;
/// let mut session = ChatSession::new(backend, store)?;
/// session.submit_user_turn("I want to book a call").await?;
/// # Ok(())
/// # }
/// ```
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    store: ProfileStore,
    messages: Vec<Message>,
    input: String,
    loading: bool,
    lead: LeadState,
}

impl ChatSession {
    /// Create a session, restoring persisted state or seeding a welcome
    ///
    /// The transcript, captured lead fields, and submitted flag are each read
    /// independently from the store. With no persisted transcript the session
    /// starts from a single synthetic welcome message, which is persisted
    /// right away.
    ///
    /// # Errors
    ///
    /// Returns error if the profile store cannot be read or written
    pub fn new(backend: Arc<dyn ChatBackend>, store: ProfileStore) -> Result<Self> {
        let snapshot = store.load_snapshot()?;

        let messages = match snapshot.messages {
            Some(messages) if !messages.is_empty() => {
                tracing::debug!("Restored {} persisted messages", messages.len());
                messages
            }
            _ => {
                let seeded = vec![Message::welcome()];
                store.save_messages(&seeded)?;
                seeded
            }
        };

        Ok(Self {
            backend,
            store,
            messages,
            input: String::new(),
            loading: false,
            lead: LeadState {
                name: snapshot.user_name,
                email: snapshot.user_email,
                submitted: snapshot.lead_submitted,
            },
        })
    }

    /// The conversation transcript, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Captured lead state
    pub fn lead(&self) -> &LeadState {
        &self.lead
    }

    /// True while a completion request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current staged input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Stage text into the input buffer without submitting it
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the staged input buffer as a user turn
    ///
    /// Equivalent to [`ChatSession::submit_user_turn`] with the buffer
    /// contents; the buffer is cleared when the turn is accepted.
    pub async fn submit(&mut self) -> Result<TurnOutcome> {
        let text = self.input.clone();
        self.submit_user_turn(&text).await
    }

    /// Submit one user turn: capture contact info, relay to the backend,
    /// append the reply
    ///
    /// Empty/whitespace input and input arriving while a request is in
    /// flight are ignored. On any completion failure the fixed fallback
    /// assistant message is appended instead of a reply; the conversation
    /// stays usable.
    ///
    /// # Arguments
    ///
    /// * `text` - The user's message; leading/trailing whitespace is trimmed
    ///
    /// # Errors
    ///
    /// Returns error only if the profile store cannot be written; backend
    /// failures are absorbed into the fallback message
    pub async fn submit_user_turn(&mut self, text: &str) -> Result<TurnOutcome> {
        let text = text.trim();
        if text.is_empty() || self.loading {
            return Ok(TurnOutcome::Ignored);
        }

        // Contact capture runs against the raw input before the turn is
        // appended, so the heuristics see the transcript the user replied to.
        let detected_email = capture::extract_email(text);
        if let Some(email) = &detected_email {
            if self.lead.email.is_none() {
                tracing::debug!("Captured email from message");
                self.lead.email = Some(email.clone());
                self.store.set_user_email(email)?;
            }
        }

        let assistant_asked_for_name = self
            .messages
            .iter()
            .rev()
            .find(|m| m.is_assistant())
            .map(|m| capture::asks_for_name(&m.content))
            .unwrap_or(false);
        if assistant_asked_for_name && self.lead.name.is_none() {
            tracing::debug!("Captured name from message");
            self.lead.name = Some(text.to_string());
            self.store.set_user_name(text)?;
        }

        if let (Some(name), Some(email)) = (self.lead.name.clone(), self.lead.email.clone()) {
            if !self.lead.submitted {
                self.submit_lead(&name, &email).await;
            }
        } else if let (Some(email), Some(name)) = (&detected_email, self.lead.name.clone()) {
            if !self.lead.submitted {
                let email = email.clone();
                self.submit_lead(&name, &email).await;
            }
        }

        // History excludes the synthetic welcome message and the turn being
        // submitted.
        let history: Vec<ChatTurn> = self
            .messages
            .iter()
            .skip(1)
            .map(|m| ChatTurn::new(m.role.clone(), m.content.clone()))
            .collect();

        self.messages.push(Message::user(text));
        self.input.clear();
        self.store.save_messages(&self.messages)?;
        self.loading = true;

        let reply = self.backend.complete(text, &history).await;

        // The flag drops on both paths before anything else can fail.
        self.loading = false;

        let assistant = match reply {
            Ok(content) => Message::assistant(content),
            Err(e) => {
                tracing::error!("Chat completion failed: {}", e);
                Message::assistant(FALLBACK_TEXT)
            }
        };

        self.messages.push(assistant);
        self.store.save_messages(&self.messages)?;

        Ok(TurnOutcome::Replied)
    }

    /// Submit the captured lead to the backend at most once
    ///
    /// No-op when the lead was already submitted. Success marks and persists
    /// the submitted flag; failure is logged and leaves the flag false so a
    /// later detection may retry.
    async fn submit_lead(&mut self, name: &str, email: &str) {
        if self.lead.submitted {
            return;
        }

        match self.backend.book_lead(name, email).await {
            Ok(()) => {
                self.lead.submitted = true;
                if let Err(e) = self.store.set_lead_submitted(true) {
                    tracing::warn!("Failed to persist lead flag: {}", e);
                }
                tracing::info!("Lead saved: name={}, email={}", name, email);
            }
            Err(e) => {
                tracing::warn!("Failed to save lead: {}", e);
            }
        }
    }

    /// Clear persisted state and start over from the welcome message
    ///
    /// This is the "storage cleared externally" teardown: the store is wiped
    /// and the in-memory state re-initialized as a fresh session would be.
    ///
    /// # Errors
    ///
    /// Returns error if the profile store cannot be written
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.messages = vec![Message::welcome()];
        self.store.save_messages(&self.messages)?;
        self.input.clear();
        self.loading = false;
        self.lead = LeadState::default();
        Ok(())
    }
}
