use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use whatsbot_proxy::{
    Error, Result,
    llm::{Completion, LlmClient},
};

/// Mock LLM client for testing. Records forwarded messages so tests can
/// assert whether the upstream seam was reached at all.
#[derive(Debug)]
pub struct MockLlmClient {
    pub completions: Arc<Mutex<Vec<Completion>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<Error>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            completions: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_completion(self, completion: Completion) -> Self {
        self.completions.lock().unwrap().push(completion);
        self
    }

    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn forwarded_messages(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete_chat(&self, user_message: &str) -> Result<Completion> {
        self.requests.lock().unwrap().push(user_message.to_string());

        if let Some(ref error) = self.error {
            return Err(error.clone());
        }

        let mut completions = self.completions.lock().unwrap();
        if completions.is_empty() {
            return Err(Error::upstream("no more mock completions available"));
        }

        Ok(completions.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
