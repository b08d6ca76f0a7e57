//! Axum route handler for the chat endpoint

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use limbic_core::HttpError;

use crate::error::ChatError;
use crate::persona::Persona;
use crate::state::ChatState;
use crate::types::{
    ChatCompletionRequest, ChatMessage, ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, Role,
};
use crate::upstream::UpstreamReply;

/// Build the chat router
pub fn chat_router(state: ChatState) -> Router {
    Router::new().route("/api/chat", routing::post(chat)).with_state(state)
}

/// Handle `POST /api/chat`
///
/// The body is parsed by hand rather than with the `Json` extractor so
/// that malformed input maps to a plain 400 envelope.
async fn chat(State(state): State<ChatState>, body: Bytes) -> Response {
    match chat_inner(&state, &body).await {
        Ok(reply) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

async fn chat_inner(state: &ChatState, body: &[u8]) -> Result<UpstreamReply, ChatError> {
    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|e| ChatError::InvalidRequest(format!("invalid message format: {e}")))?;

    if request.messages.is_empty() {
        return Err(ChatError::InvalidRequest("messages must not be empty".to_owned()));
    }

    let persona = request
        .persona
        .unwrap_or_else(|| Persona::detect(&request.messages[0].content));

    let messages = with_system_message(persona, request.messages);

    tracing::debug!(
        persona = persona.name(),
        message_count = messages.len(),
        "forwarding chat request"
    );

    let completion_request = ChatCompletionRequest {
        messages,
        temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        model: None,
    };

    let reply = state.upstream.send(&completion_request).await?;

    // The client already validated the shape; a miss here is terminal
    if reply.completion.first_message().is_none() {
        return Err(ChatError::UpstreamFormat("response has no choices[0].message".to_owned()));
    }

    Ok(reply)
}

/// Prepend the persona system message to the caller's conversation,
/// keeping the original messages in their original order
fn with_system_message(persona: Persona, messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let system = ChatMessage {
        role: Role::System,
        content: persona.system_prompt(),
    };

    let mut augmented = Vec::with_capacity(messages.len() + 1);
    augmented.push(system);
    augmented.extend(messages);
    augmented
}

/// Map a chat error to its HTTP envelope
///
/// 400s use a flat `{"error": string}` body; 500s carry a structured
/// envelope with a timestamp and, when available, diagnostic detail.
fn error_response(error: &ChatError) -> Response {
    let status = error.status_code();

    tracing::error!(error = %error, error_type = error.error_type(), "chat request failed");

    let body = if status == StatusCode::BAD_REQUEST {
        serde_json::json!({ "error": error.client_message() })
    } else {
        let mut envelope = serde_json::json!({
            "message": error.client_message(),
            "timestamp": jiff::Timestamp::now().to_string(),
        });
        if let Some(stack) = error.diagnostic() {
            envelope["stack"] = serde_json::Value::String(stack);
        }
        serde_json::json!({ "error": envelope })
    };

    (status, Json(body)).into_response()
}
