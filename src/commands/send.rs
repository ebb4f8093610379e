//! One-shot message handler
//!
//! Submits a single turn against the persisted conversation and prints the
//! assistant's reply. The turn goes through the same controller as the
//! interactive session, so lead capture and persistence behave identically.

use crate::backend::BackendClient;
use crate::chat::{ChatSession, TurnOutcome};
use crate::config::Config;
use crate::error::Result;

use colored::Colorize;
use std::sync::Arc;

/// Send one message and print the reply
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `message` - The message to send
///
/// # Errors
///
/// Returns error if the backend client or profile store cannot be
/// initialized; a backend failure prints the fallback reply instead.
pub async fn run_send(config: Config, message: String) -> Result<()> {
    tracing::info!("Sending one-shot message");

    let backend = Arc::new(BackendClient::new(config.backend.clone())?);
    let store = super::open_store(&config)?;
    let mut session = ChatSession::new(backend, store)?;

    match session.submit_user_turn(&message).await? {
        TurnOutcome::Replied => {
            if let Some(reply) = session.messages().last() {
                println!("{} {}", "zuvigo>".cyan().bold(), reply.content);
            }
        }
        TurnOutcome::Ignored => {
            tracing::debug!("Input rejected, nothing sent");
        }
    }

    Ok(())
}
