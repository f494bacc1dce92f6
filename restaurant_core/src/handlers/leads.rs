use crate::{
    error::{AppError, Result},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

pub async fn handle_capture_lead(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let record = state.leads.append(body).await?;
    info!("POST /api/lead - lead captured at {}", record.timestamp);

    Ok(Json(json!({ "status": "success" })))
}
