use crate::chat::Message;
use crate::error::{Result, ZuvigoError};
use anyhow::Context;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

pub mod types;
pub use types::ProfileSnapshot;

/// Storage key for the serialized conversation transcript
pub const KEY_CHAT_MESSAGES: &str = "zuvigo_chat_messages";
/// Storage key for the captured visitor name
pub const KEY_USER_NAME: &str = "zuvigo_user_name";
/// Storage key for the captured visitor email
pub const KEY_USER_EMAIL: &str = "zuvigo_user_email";
/// Storage key for the lead-submitted flag
pub const KEY_EMAIL_SAVED: &str = "zuvigo_email_saved";

/// Per-user profile store backing the chat client
///
/// Holds the conversation transcript and the captured lead fields under
/// independent keys, each read separately at startup and rewritten whole on
/// change. A write replaces the prior value atomically.
pub struct ProfileStore {
    db_path: PathBuf,
}

impl ProfileStore {
    /// Create a new profile store in the user's data directory
    ///
    /// The database path can be overridden with the `ZUVIGO_PROFILE_DB`
    /// environment variable, which makes it easy to point the binary at a
    /// test profile without changing the application data dir.
    pub fn new() -> Result<Self> {
        if let Ok(override_path) = std::env::var("ZUVIGO_PROFILE_DB") {
            return Self::new_with_path(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "zuvigo", "zuvigo-chat")
            .ok_or_else(|| ZuvigoError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        let db_path = data_dir.join("profile.db");
        let store = Self { db_path };

        store.init()?;

        Ok(store)
    }

    /// Create a profile store that uses the specified database path
    ///
    /// This is primarily useful for tests where the default application data
    /// directory is not desirable (for example, using a temporary directory).
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::storage::ProfileStore;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = ProfileStore::new_with_path(dir.path().join("profile.db")).unwrap();
    /// assert!(store.user_name().unwrap().is_none());
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        // Ensure parent directory exists so opening the DB file succeeds.
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| ZuvigoError::Storage(e.to_string()))?;
        }

        let store = Self { db_path };
        store.init()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS profile (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create tables")
        .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        Ok(())
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .context("Failed to open database")
            .map_err(|e| ZuvigoError::Storage(e.to_string()).into())
    }

    /// Read a raw value by key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;

        conn.query_row(
            "SELECT value FROM profile WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .context("Failed to query profile value")
        .map_err(|e| ZuvigoError::Storage(e.to_string()).into())
    }

    /// Write a raw value, replacing any prior value for the key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.open()?;

        let now = Utc::now().to_rfc3339();

        let tx = conn
            .transaction()
            .context("Failed to start transaction")
            .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        tx.execute(
            "INSERT INTO profile (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )
        .context("Failed to write profile value")
        .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        tx.commit()
            .context("Failed to commit transaction")
            .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        Ok(())
    }

    /// When a key was last written, if ever
    pub fn last_updated(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let conn = self.open()?;

        let raw: Option<String> = conn
            .query_row(
                "SELECT updated_at FROM profile WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to query update timestamp")
            .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        Ok(raw.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        }))
    }

    /// Delete every stored key, returning the profile to its initial state
    pub fn clear(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute("DELETE FROM profile", [])
            .context("Failed to clear profile")
            .map_err(|e| ZuvigoError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Load the persisted conversation transcript, if any
    pub fn load_messages(&self) -> Result<Option<Vec<Message>>> {
        match self.get(KEY_CHAT_MESSAGES)? {
            Some(json) => {
                let messages: Vec<Message> = serde_json::from_str(&json)
                    .context("Failed to deserialize messages")
                    .map_err(|e| ZuvigoError::Storage(e.to_string()))?;
                Ok(Some(messages))
            }
            None => Ok(None),
        }
    }

    /// Persist the conversation transcript as a whole snapshot
    pub fn save_messages(&self, messages: &[Message]) -> Result<()> {
        let json = serde_json::to_string(messages)
            .context("Failed to serialize messages")
            .map_err(|e| ZuvigoError::Storage(e.to_string()))?;
        self.set(KEY_CHAT_MESSAGES, &json)
    }

    /// Captured visitor name, if any
    pub fn user_name(&self) -> Result<Option<String>> {
        self.get(KEY_USER_NAME)
    }

    /// Persist the captured visitor name
    pub fn set_user_name(&self, name: &str) -> Result<()> {
        self.set(KEY_USER_NAME, name)
    }

    /// Captured visitor email, if any
    pub fn user_email(&self) -> Result<Option<String>> {
        self.get(KEY_USER_EMAIL)
    }

    /// Persist the captured visitor email
    pub fn set_user_email(&self, email: &str) -> Result<()> {
        self.set(KEY_USER_EMAIL, email)
    }

    /// Whether the captured lead has already been submitted to the backend
    pub fn lead_submitted(&self) -> Result<bool> {
        Ok(self.get(KEY_EMAIL_SAVED)?.as_deref() == Some("true"))
    }

    /// Persist the lead-submitted flag
    pub fn set_lead_submitted(&self, submitted: bool) -> Result<()> {
        self.set(KEY_EMAIL_SAVED, if submitted { "true" } else { "false" })
    }

    /// Read every profile key into a snapshot
    ///
    /// Each field is read independently, so a missing or unreadable field
    /// never hides the others.
    pub fn load_snapshot(&self) -> Result<ProfileSnapshot> {
        Ok(ProfileSnapshot {
            messages: self.load_messages()?,
            user_name: self.user_name()?,
            user_email: self.user_email()?,
            lead_submitted: self.lead_submitted()?,
        })
    }
}
