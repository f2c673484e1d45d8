//! Request and response types for the council backend API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Availability and model list for one provider, as reported by
/// `GET /api/models`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderStatus {
    /// Whether an API key is configured for this provider
    pub available: bool,
    /// Model identifiers this provider can serve
    pub models: Vec<String>,
}

/// Default model selection configured on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDefaults {
    pub council_models: Vec<String>,
    pub chairman_model: String,
}

/// Full models configuration from `GET /api/models`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelsConfig {
    /// Provider name -> availability and model list
    pub providers: HashMap<String, ProviderStatus>,
    /// Models allowed to act as chairman
    pub chairman_eligible: Vec<String>,
    /// Backend defaults used when a request carries no overrides
    pub defaults: ModelDefaults,
}

impl ModelsConfig {
    /// All models whose provider currently has a key configured.
    pub fn available_models(&self) -> Vec<String> {
        let mut models: Vec<String> = self
            .providers
            .values()
            .filter(|p| p.available)
            .flat_map(|p| p.models.iter().cloned())
            .collect();
        models.sort();
        models
    }
}

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// One message within a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Conversation list entry from `GET /api/conversations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationSummary {
    pub id: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Title derived from the first message; absent for fresh conversations
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message_count: u32,
}

/// Full conversation from `GET /api/conversations/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Request body for sending a message, streaming or not.
///
/// Optional fields are omitted from the JSON entirely when unset so the
/// backend falls back to its configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageRequest {
    /// The user's message text
    pub content: String,
    /// Override of the council roster for this message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub council_models: Option<Vec<String>>,
    /// Override of the chairman model for this message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chairman_model: Option<String>,
}

impl MessageRequest {
    /// Create a request using the backend's default model selection.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            council_models: None,
            chairman_model: None,
        }
    }

    /// Override the council roster for this message.
    pub fn with_council_models(mut self, models: Vec<String>) -> Self {
        self.council_models = Some(models);
        self
    }

    /// Override the chairman model for this message.
    pub fn with_chairman_model(mut self, model: impl Into<String>) -> Self {
        self.chairman_model = Some(model.into());
        self
    }
}
