#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod server;
pub mod upstream;

use serde::Deserialize;

pub use server::*;
pub use upstream::*;

/// Top-level limbic configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream chat-completion provider configuration
    pub upstream: UpstreamConfig,
}
