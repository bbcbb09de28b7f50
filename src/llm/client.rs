use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Identifies the app to OpenRouter, as their API docs ask.
const HTTP_REFERER: &str = "https://railway.app";
const APP_TITLE: &str = "WhatsApp Bot Assistant";

/// Narrow seam over the upstream chat-completion API.
///
/// Implementations return errors already categorized into the taxonomy of
/// [`crate::Error`], so the HTTP layer only maps kinds to status codes.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete_chat(&self, user_message: &str) -> Result<Completion>;
}

pub struct OpenRouterClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenRouterClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn complete_chat(&self, user_message: &str) -> Result<Completion> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(user_message),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(model = %request.model, "Sending chat completion to OpenRouter");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", HTTP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request)
            .send()
            .await
            .map_err(categorize_transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::UpstreamAuth);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::UpstreamRateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(format!(
                "unexpected upstream status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream(format!("malformed completion payload: {}", e)))?;

        debug!(
            model = %completion.model,
            choices = completion.choices.len(),
            "Received chat completion from OpenRouter"
        );

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| Error::upstream("completion contained no choices"))?;

        Ok(Completion {
            content,
            model: completion.model,
            tokens_used: completion.usage.map(|usage| usage.total_tokens),
        })
    }
}

fn categorize_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::UpstreamTimeout
    } else if err.is_connect() {
        Error::UpstreamUnreachable
    } else {
        Error::Network(err)
    }
}
