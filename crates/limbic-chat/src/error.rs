use http::StatusCode;
use limbic_core::HttpError;
use thiserror::Error;

/// Errors surfaced by the chat route and the upstream client
#[derive(Debug, Error)]
pub enum ChatError {
    /// Client sent a malformed or invalid request body
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure or non-2xx status from the provider
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider answered with a body missing a usable completion
    #[error("upstream response format invalid: {0}")]
    UpstreamFormat(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ChatError {
    /// Diagnostic detail attached to 500 envelopes when available
    ///
    /// Not part of the stable response contract.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Internal(e) => Some(format!("{e:?}")),
            _ => None,
        }
    }
}

impl HttpError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::UpstreamFormat(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream(_) => "upstream_error",
            Self::UpstreamFormat(_) => "upstream_format_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "an internal error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}
