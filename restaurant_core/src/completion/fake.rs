//! In-process completion backend for tests and offline runs.
//!
//! Responses are matched by substring against the user prompt; every
//! request is recorded so tests can assert on the prompt that was sent.

use super::{CompletionBackend, CompletionError, CompletionRequest};
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct FakeBackend {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    failure: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every prompt with `response`.
    pub fn replying(response: &str) -> Self {
        Self::new().with_default_response(response)
    }

    /// Fails every call with a transport error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let prompt = request.user_prompt().unwrap_or_default().to_lowercase();
        self.requests.lock().push(request);

        if let Some(message) = &self.failure {
            return Err(CompletionError::Transport(message.clone()));
        }

        // First registered pattern wins.
        if let Some((_, response)) = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
        {
            return Ok(response.clone());
        }

        self.default_response.clone().ok_or_else(|| {
            CompletionError::Transport(format!(
                "FakeBackend: no response configured for prompt: {}",
                prompt.chars().take(100).collect::<String>()
            ))
        })
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
