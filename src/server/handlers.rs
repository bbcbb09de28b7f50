use super::types::{
    ChatErrorResponse, ChatRequest, ChatResponse, HealthResponse, StatusResponse,
};
use crate::{Error, config::Config, llm::LlmClient};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

pub const SERVICE_NAME: &str = "WhatsApp Bot Proxy";

/// Log previews and fallback echoes are capped at this many characters.
const PREVIEW_CHARS: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn LlmClient>,
}

/// GET / - service metadata for quick deployment checks.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: SERVICE_NAME,
        status: "online",
        timestamp: Utc::now().to_rfc3339(),
        openrouter: credential_label(&state.config),
        endpoints: vec!["POST /api/chat", "GET /health"],
    })
}

/// GET /health - always healthy while the process is serving.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
        openrouter: credential_label(&state.config),
    })
}

/// POST /api/chat - validate, forward to OpenRouter, map the outcome.
pub async fn chat(
    State(state): State<AppState>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatErrorResponse>)> {
    // Bodies that are not JSON objects never had a message either; they get
    // the same canonical 400 instead of the extractor's plain-text 422.
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = Error::InvalidMessage;
            info!("Rejected chat request: {}", rejection);
            return Err((err.status_code(), Json(ChatErrorResponse::new(err.to_string()))));
        }
    };

    let Some(message) = request.text() else {
        let err = Error::InvalidMessage;
        info!("Rejected chat request: missing or empty message");
        return Err((err.status_code(), Json(ChatErrorResponse::new(err.to_string()))));
    };

    info!(preview = %truncate_chars(message, PREVIEW_CHARS), "Received chat message");

    if !state.config.credential_configured() {
        let err = Error::ApiKeyMissing;
        error!("Rejected chat request: {}", err);
        return Err((err.status_code(), Json(ChatErrorResponse::new(err.to_string()))));
    }

    match state.llm.complete_chat(message).await {
        Ok(completion) => {
            info!(
                model = %completion.model,
                tokens_used = ?completion.tokens_used,
                preview = %truncate_chars(&completion.content, PREVIEW_CHARS),
                "Chat completion succeeded"
            );
            Ok(Json(ChatResponse {
                success: true,
                response: completion.content,
                model: completion.model,
                tokens_used: completion.tokens_used,
            }))
        }
        Err(err) => {
            error!("Chat completion failed: {}", err);
            Err((err.status_code(), Json(error_body(&err, message))))
        }
    }
}

/// Builds the error body for a failed upstream call. Categorized kinds carry
/// their own stable message; generic failures get a stable message with the
/// raw detail tucked into `details`.
fn error_body(err: &Error, message: &str) -> ChatErrorResponse {
    let response = match err {
        Error::Upstream(detail) => ChatErrorResponse::new("failed to process the message")
            .with_details(serde_json::Value::String(detail.clone())),
        Error::Network(source) => ChatErrorResponse::new("failed to process the message")
            .with_details(serde_json::Value::String(source.to_string())),
        kind => ChatErrorResponse::new(kind.to_string()),
    };

    response.with_fallback(format!(
        "Recibí tu mensaje: \"{}\". Estamos teniendo dificultades técnicas.",
        truncate_chars(message, PREVIEW_CHARS)
    ))
}

fn credential_label(config: &Config) -> &'static str {
    if config.credential_configured() {
        "configured"
    } else {
        "not_configured"
    }
}

/// Char-boundary-safe prefix; messages may contain multi-byte emoji.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
