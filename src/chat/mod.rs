//! Conversation management for the Zuvigo chat client
//!
//! This module holds the conversation controller and its supporting pieces:
//!
//! - `message`: transcript message types and the fixed welcome/fallback texts
//! - `capture`: the email and name lead-capture heuristics
//! - `session`: the single-conversation state machine

pub mod capture;
pub mod message;
pub mod session;

pub use message::{Message, FALLBACK_TEXT, WELCOME_MESSAGE_ID, WELCOME_TEXT};
pub use session::{ChatSession, LeadState, TurnOutcome};
