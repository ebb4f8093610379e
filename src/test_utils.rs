//! Test utilities for the Zuvigo chat client
//!
//! This module provides common test utilities: a scripted fake backend for
//! exercising the conversation controller without a network, and a temporary
//! profile store helper.

use crate::backend::{ChatBackend, ChatTurn};
use crate::error::{Result, ZuvigoError};
use crate::storage::ProfileStore;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;

/// A scripted assistant reply for the fake backend
#[derive(Debug, Clone)]
pub enum FakeReply {
    /// Respond with this text
    Text(String),
    /// Fail the completion call with this error message
    Failure(String),
}

/// Scripted in-memory backend for controller tests
///
/// Records every completion and lead request it receives and plays back
/// queued replies. When the reply queue is empty, completions answer with a
/// fixed acknowledgement.
#[derive(Default)]
pub struct FakeBackend {
    replies: Mutex<VecDeque<FakeReply>>,
    completion_requests: Mutex<Vec<(String, Vec<ChatTurn>)>>,
    lead_requests: Mutex<Vec<(String, String)>>,
    fail_leads: Mutex<bool>,
}

impl FakeBackend {
    /// Create a fake backend with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(FakeReply::Text(text.into()));
    }

    /// Queue a failed completion
    pub fn push_failure(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(FakeReply::Failure(message.into()));
    }

    /// Make every lead submission fail (or succeed again)
    pub fn set_fail_leads(&self, fail: bool) {
        *self.fail_leads.lock().unwrap() = fail;
    }

    /// Every completion request received, in order
    pub fn completion_requests(&self) -> Vec<(String, Vec<ChatTurn>)> {
        self.completion_requests.lock().unwrap().clone()
    }

    /// Every lead request received, in order
    pub fn lead_requests(&self) -> Vec<(String, String)> {
        self.lead_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn complete(&self, message: &str, history: &[ChatTurn]) -> Result<String> {
        self.completion_requests
            .lock()
            .unwrap()
            .push((message.to_string(), history.to_vec()));

        match self.replies.lock().unwrap().pop_front() {
            Some(FakeReply::Text(text)) => Ok(text),
            Some(FakeReply::Failure(message)) => Err(ZuvigoError::Backend(message).into()),
            None => Ok("Thanks for reaching out!".to_string()),
        }
    }

    async fn book_lead(&self, name: &str, email: &str) -> Result<()> {
        self.lead_requests
            .lock()
            .unwrap()
            .push((name.to_string(), email.to_string()));

        if *self.fail_leads.lock().unwrap() {
            Err(ZuvigoError::Backend("lead endpoint unavailable".to_string()).into())
        } else {
            Ok(())
        }
    }
}

/// Create a profile store backed by a temporary directory
///
/// Returns the directory guard alongside the store; the database is removed
/// when the guard is dropped.
pub fn temp_store() -> (TempDir, ProfileStore) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = ProfileStore::new_with_path(dir.path().join("profile.db"))
        .expect("Failed to create profile store");
    (dir, store)
}
