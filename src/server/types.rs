use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound chat request. The field is kept as raw JSON so presence and type
/// violations produce the canonical 400 body instead of a framework 422.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// The validated message: present, a string, non-empty after trimming.
    /// Returns the original untrimmed text, which is forwarded verbatim.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_ref()?
            .as_str()
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ChatErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_response: Option<String>,
}

impl ChatErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            fallback_response: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_response = Some(fallback.into());
        self
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub timestamp: String,
    pub openrouter: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub openrouter: &'static str,
}
