//! Failure type of the content-generation endpoints

use crate::completion::CompletionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Prompt rendering failed: {0}")]
    Prompt(#[from] handlebars::RenderError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl ContentError {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentError::InvalidRequest(_) => "invalid_request",
            ContentError::Prompt(_) => "prompt",
            ContentError::Completion(CompletionError::NotConfigured(_)) => "not_configured",
            ContentError::Completion(CompletionError::Transport(_)) => "transport",
            ContentError::Completion(CompletionError::Api { .. }) => "upstream",
            ContentError::Completion(CompletionError::MalformedResponse(_)) => "malformed_response",
        }
    }

    /// Caller-facing text. Upstream details only go to the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContentError::InvalidRequest(_) => "Request body could not be read as a JSON object",
            ContentError::Prompt(_) => "Prompt could not be built",
            ContentError::Completion(CompletionError::NotConfigured(_)) => {
                "Completion service is not configured"
            }
            ContentError::Completion(CompletionError::Transport(_)) => {
                "Completion service could not be reached"
            }
            ContentError::Completion(CompletionError::Api { .. }) => {
                "Completion service returned an error"
            }
            ContentError::Completion(CompletionError::MalformedResponse(_)) => {
                "Completion service returned an unreadable response"
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match &self {
            ContentError::InvalidRequest(msg) => tracing::warn!("Rejected content request: {}", msg),
            ContentError::Prompt(err) => tracing::error!("Prompt rendering failed: {}", err),
            ContentError::Completion(err) => tracing::error!(kind = self.kind(), "Completion failed: {}", err),
        }

        let body = Json(json!({
            "success": false,
            "error": self.public_message(),
            "kind": self.kind(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
