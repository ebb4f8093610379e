/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`    — Interactive chat session
- `send`    — Send a single message and print the reply
- `history` — Inspect or clear the persisted conversation

These handlers are intentionally small and use the library components:
the backend client, the profile store, and the conversation controller.
*/

use crate::config::Config;
use crate::error::Result;
use crate::storage::ProfileStore;

pub mod chat;
pub mod history;
pub mod send;

/// Open the profile store configured for this invocation
///
/// An explicit `storage.profile_db` path wins; otherwise the store lives in
/// the user's data directory (or wherever `ZUVIGO_PROFILE_DB` points).
pub(crate) fn open_store(config: &Config) -> Result<ProfileStore> {
    match &config.storage.profile_db {
        Some(path) => ProfileStore::new_with_path(path.clone()),
        None => ProfileStore::new(),
    }
}
