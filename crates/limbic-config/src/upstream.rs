use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat-completion provider the gateway forwards to
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Provider base URL
    pub base_url: Url,
    /// Path of the chat-completion endpoint, appended to `base_url`
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
    /// Model name sent with every request, overriding any caller choice
    pub model: String,
    /// API key for the `Authorization: Bearer` header
    pub api_key: SecretString,
    /// Retry policy for failed attempts
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_chat_path() -> String {
    "/api/v1/chat/completions".to_string()
}

/// Retry policy for upstream requests
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base wait between attempts (e.g. "1s", "500ms"); the wait grows
    /// linearly with the attempt number
    #[serde(default = "default_backoff")]
    pub backoff: String,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff: default_backoff(),
        }
    }
}

impl RetryConfig {
    /// Parse the configured backoff string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid duration
    pub fn backoff_duration(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.backoff)
            .map_err(|e| anyhow::anyhow!("invalid upstream.retry.backoff '{}': {e}", self.backoff))
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_attempts() -> u32 {
    3
}

fn default_backoff() -> String {
    "1s".to_string()
}
