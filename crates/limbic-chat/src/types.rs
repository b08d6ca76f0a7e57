//! Chat wire types shared by the route handler and the upstream client

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// Sampling temperature used when the caller does not supply one
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Token limit used when the caller does not supply one
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant response
    Assistant,
}

/// Message in a conversation, immutable once sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message author
    pub role: Role,
    /// Message content
    pub content: String,
}

/// Inbound body for `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, oldest first
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature override
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Token limit override
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Explicit persona selection; when absent the persona is derived
    /// from the first message's text
    #[serde(default)]
    pub persona: Option<Persona>,
}

/// Completion request handed to the upstream client
#[derive(Debug, Clone)]
pub struct ChatCompletionRequest {
    /// Conversation including the prepended system message
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Caller-suggested model; the configured model always wins
    pub model: Option<String>,
}

/// Parsed view of the provider response used for validation
///
/// Lenient on purpose: the raw body is what gets relayed, this view
/// only has to establish that a usable completion is present.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Provider-assigned response identifier
    #[serde(default)]
    pub id: String,
    /// Candidate completions
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Generated message, absent in malformed responses
    #[serde(default)]
    pub message: Option<ChatMessage>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl ChatCompletionResponse {
    /// The first choice's message, if the response carries one
    pub fn first_message(&self) -> Option<&ChatMessage> {
        self.choices.first().and_then(|choice| choice.message.as_ref())
    }
}
