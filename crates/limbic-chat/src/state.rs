//! Shared state for the chat route handlers

use std::sync::Arc;

use limbic_config::UpstreamConfig;

use crate::upstream::UpstreamClient;

/// Read-only state shared by chat handlers
#[derive(Clone)]
pub struct ChatState {
    pub(crate) upstream: Arc<UpstreamClient>,
}

impl ChatState {
    /// Build state from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream client cannot be constructed
    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        Ok(Self {
            upstream: Arc::new(UpstreamClient::new(config)?),
        })
    }
}
