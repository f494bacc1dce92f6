//! Chat-completion backends.
//!
//! Handlers never talk to the hosted model directly. They receive an
//! `Arc<dyn CompletionBackend>` through [`crate::AppState`], which is built
//! once at start-up from [`crate::config::CompletionConfig`] and can be
//! replaced by [`FakeBackend`] in tests.

mod fake;
mod openai;

pub use fake::FakeBackend;
pub use openai::OpenAiBackend;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion backend not configured: {0}")]
    NotConfigured(String),

    #[error("Request to completion API failed: {0}")]
    Transport(String),

    #[error("Completion API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse completion response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// One completion call: role-tagged messages plus sampling bounds.
/// The model name belongs to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>, max_tokens: u32) -> Self {
        Self { messages, max_tokens, temperature: None }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Content of the last user message, if any.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }
}

#[async_trait]
pub trait CompletionBackend: Send + Sync + fmt::Debug {
    /// Returns the raw text of the first choice.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;

    fn model_name(&self) -> &str;
}
