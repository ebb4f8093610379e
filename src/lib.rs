//! Zuvigo chat - lead-capturing chat client library
//!
//! This library provides the core functionality for the Zuvigo chat client,
//! including the conversation controller, backend API client, lead-capture
//! heuristics, profile persistence, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `chat`: Conversation controller, transcript messages, capture heuristics
//! - `backend`: Backend API trait and the reqwest client implementation
//! - `storage`: Per-user profile store (transcript + captured lead fields)
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zuvigo_chat::backend::BackendClient;
//! use zuvigo_chat::chat::ChatSession;
//! use zuvigo_chat::config::BackendConfig;
//! use zuvigo_chat::storage::ProfileStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = Arc::new(BackendClient::new(BackendConfig::default())?);
//!     let store = ProfileStore::new()?;
//!     let mut session = ChatSession::new(backend, store)?;
//!
//!     session.submit_user_turn("I want to book a call").await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use backend::{BackendClient, ChatBackend, ChatTurn};
pub use chat::{ChatSession, LeadState, Message, TurnOutcome};
pub use config::Config;
pub use error::{Result, ZuvigoError};
pub use storage::ProfileStore;

#[cfg(test)]
pub mod test_utils;
