//! HTTP client for the configured chat-completion provider

use std::time::Duration;

use bytes::Bytes;
use limbic_config::UpstreamConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::error::ChatError;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Provider response: the raw body that gets relayed to the caller,
/// plus the parsed view used for validation
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    /// Body exactly as the provider sent it
    pub body: Bytes,
    /// Parsed view of the same body
    pub completion: ChatCompletionResponse,
}

/// Outbound wire payload
///
/// Model and stream flag are injected here, not taken from the caller.
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

/// Client for the upstream chat-completion endpoint
///
/// Built once from configuration at startup and shared read-only across
/// requests.
pub struct UpstreamClient {
    client: Client,
    url: String,
    model: String,
    api_key: SecretString,
    max_attempts: u32,
    backoff: Duration,
}

impl UpstreamClient {
    /// Create from upstream configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured backoff string is invalid
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let base = config.base_url.as_str().trim_end_matches('/');
        let path = config.chat_path.trim_start_matches('/');

        Ok(Self {
            client: Client::new(),
            url: format!("{base}/{path}"),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_attempts: config.retry.max_attempts,
            backoff: config.retry.backoff_duration()?,
        })
    }

    /// Send a completion request, retrying failed attempts
    ///
    /// Every attempt failure is retried the same way: transport errors,
    /// non-2xx statuses, unparseable bodies, and bodies without a usable
    /// completion. Attempts run strictly one after another, waiting
    /// `backoff * attempt_number` in between; the final attempt's error
    /// propagates.
    pub async fn send(&self, request: &ChatCompletionRequest) -> Result<UpstreamReply, ChatError> {
        let mut attempt = 1;
        loop {
            match self.try_send(request).await {
                Ok(reply) => return Ok(reply),
                Err(e) if attempt < self.max_attempts => {
                    tracing::warn!(attempt, error = %e, "upstream attempt failed, retrying");
                    tokio::time::sleep(self.retry_delay(attempt)).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(attempt, error = %e, "upstream request failed");
                    return Err(e);
                }
            }
        }
    }

    /// Linear backoff: one backoff unit after the first attempt, two
    /// after the second, and so on
    fn retry_delay(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }

    async fn try_send(&self, request: &ChatCompletionRequest) -> Result<UpstreamReply, ChatError> {
        // The configured model always wins over a caller-supplied one
        let payload = WireRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ChatError::Upstream(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(ChatError::Upstream(format!("provider returned {status}: {text}")));
        }

        let completion: ChatCompletionResponse = serde_json::from_slice(&body)
            .map_err(|e| ChatError::UpstreamFormat(format!("failed to parse response: {e}")))?;

        if completion.first_message().is_none() {
            return Err(ChatError::UpstreamFormat("response has no choices[0].message".to_owned()));
        }

        Ok(UpstreamReply { body, completion })
    }
}
