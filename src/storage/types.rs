use crate::chat::Message;
use serde::{Deserialize, Serialize};

/// Everything the profile store holds, read in one pass at startup
///
/// Fields mirror the independent storage keys: the transcript snapshot, the
/// captured lead name and email, and the lead-submitted flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Persisted conversation transcript, if one exists
    pub messages: Option<Vec<Message>>,
    /// Captured visitor name, if any
    pub user_name: Option<String>,
    /// Captured visitor email, if any
    pub user_email: Option<String>,
    /// Whether the captured lead was already submitted to the backend
    pub lead_submitted: bool,
}

impl ProfileSnapshot {
    /// Returns true if nothing has been persisted yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_none()
            && self.user_name.is_none()
            && self.user_email.is_none()
            && !self.lead_submitted
    }
}
