//! Persona chat endpoint and the upstream chat-completion client
//!
//! Receives conversations from the chat front-end, injects a persona
//! system prompt, forwards them to the configured OpenAI-compatible
//! provider with bounded retries, and relays the reply verbatim.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod handler;
pub mod persona;
pub mod state;
pub mod types;
pub mod upstream;

pub use error::ChatError;
pub use handler::chat_router;
pub use persona::Persona;
pub use state::ChatState;
pub use upstream::{UpstreamClient, UpstreamReply};
