//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use limbic_config::{Config, CorsConfig, HealthConfig, RetryConfig, ServerConfig, UpstreamConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
///
/// Defaults to a fast retry policy so failure-path tests stay quick.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder pointed at a mock upstream
    pub fn new(upstream_base: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                upstream: UpstreamConfig {
                    base_url: upstream_base.parse().expect("valid URL"),
                    chat_path: "/api/v1/chat/completions".to_owned(),
                    model: "mock-model".to_owned(),
                    api_key: SecretString::from("test-key"),
                    retry: RetryConfig {
                        max_attempts: 3,
                        backoff: "25ms".to_owned(),
                    },
                },
            },
        }
    }

    /// Set the retry policy
    pub fn with_retry(mut self, max_attempts: u32, backoff: &str) -> Self {
        self.config.upstream.retry = RetryConfig {
            max_attempts,
            backoff: backoff.to_owned(),
        };
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.config.server.cors = Some(cors);
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
