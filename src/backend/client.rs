//! HTTP client for the Zuvigo chat backend
//!
//! Implements the `ChatBackend` trait over reqwest, posting JSON to the
//! completion endpoint (`/api/chat`) and the lead-capture endpoint
//! (`/api/chat/book`).

use crate::backend::{ChatBackend, ChatTurn};
use crate::config::BackendConfig;
use crate::error::{Result, ZuvigoError};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reqwest-backed client for the chat backend
///
/// The base URL is resolved once at construction and the same client is used
/// for both endpoints.
///
/// # Examples
///
/// ```no_run
/// use zuvigo_chat::backend::{BackendClient, ChatBackend};
/// use zuvigo_chat::config::BackendConfig;
///
/// # async fn example() -> zuvigo_chat::error::Result<()> {
/// let client = BackendClient::new(BackendConfig::default())?;
/// let reply = client.complete("Hello!", &[]).await?;
/// println!("{}", reply);
/// # Ok(())
/// # }
/// ```
pub struct BackendClient {
    client: Client,
    base_url: String,
}

/// Request body for the completion endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(rename = "conversationHistory")]
    conversation_history: &'a [ChatTurn],
}

/// Success body from the completion endpoint
#[derive(Debug, Deserialize)]
struct ChatReply {
    message: String,
}

/// Failure body from the completion endpoint
#[derive(Debug, Default, Deserialize)]
struct ChatErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Request body for the lead-capture endpoint
#[derive(Debug, Serialize)]
struct LeadRequest<'a> {
    name: &'a str,
    email: &'a str,
}

impl BackendClient {
    /// Creates a new backend client from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Backend configuration containing base URL and timeout
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::backend::BackendClient;
    /// use zuvigo_chat::config::BackendConfig;
    ///
    /// let client = BackendClient::new(BackendConfig::default());
    /// assert!(client.is_ok());
    /// ```
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("zuvigo-chat/0.1.0")
            .build()
            .map_err(|e| ZuvigoError::Backend(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        tracing::info!("Initialized backend client: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// Returns the configured base URL
    ///
    /// # Examples
    ///
    /// ```
    /// use zuvigo_chat::backend::BackendClient;
    /// use zuvigo_chat::config::BackendConfig;
    ///
    /// let client = BackendClient::new(BackendConfig::default()).unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:3000");
    /// ```
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatBackend for BackendClient {
    async fn complete(&self, message: &str, history: &[ChatTurn]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);

        let request = ChatRequest {
            message,
            conversation_history: history,
        };

        tracing::debug!(
            "Sending chat request: {} history turns",
            request.conversation_history.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat request failed: {}", e);
                ZuvigoError::Backend(format!("Chat request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: ChatErrorBody = response.json().await.unwrap_or_default();
            let detail = body
                .error
                .unwrap_or_else(|| "Failed to get response".to_string());
            tracing::error!("Chat endpoint returned {}: {}", status, detail);
            return Err(ZuvigoError::Backend(format!(
                "Chat endpoint returned {}: {}",
                status, detail
            ))
            .into());
        }

        let reply: ChatReply = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat response: {}", e);
            ZuvigoError::Backend(format!("Failed to parse chat response: {}", e))
        })?;

        Ok(reply.message)
    }

    async fn book_lead(&self, name: &str, email: &str) -> Result<()> {
        let url = format!("{}/api/chat/book", self.base_url);

        let request = LeadRequest { name, email };

        tracing::debug!("Submitting lead to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Lead request failed: {}", e);
                ZuvigoError::Backend(format!("Lead request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Lead endpoint returned {}", status);
            return Err(
                ZuvigoError::Backend(format!("Lead endpoint returned {}", status)).into(),
            );
        }

        Ok(())
    }
}
