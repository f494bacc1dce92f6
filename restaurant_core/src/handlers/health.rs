//! Liveness handler

use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /health");

    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "model": state.content.model_name(),
        "timestamp": chrono::Utc::now().timestamp(),
    })))
}
