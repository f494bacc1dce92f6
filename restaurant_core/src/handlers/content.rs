//! Content-generation handlers

use crate::{
    content::ContentError,
    extractors::ContentJson,
    models::content::{
        ConnectionTestResponse, MenuRequest, MenuResponse, NewsletterRequest, NewsletterResponse,
        ReviewRequest, ReviewResponse, SocialMediaRequest, SocialMediaResponse,
    },
    AppState,
};
use axum::{extract::State, Json};

type ContentResult<T> = std::result::Result<Json<T>, ContentError>;

pub async fn handle_generate_social_media(
    State(state): State<AppState>,
    ContentJson(req): ContentJson<SocialMediaRequest>,
) -> ContentResult<SocialMediaResponse> {
    Ok(Json(state.content.social_media(req).await?))
}

pub async fn handle_generate_newsletter(
    State(state): State<AppState>,
    ContentJson(req): ContentJson<NewsletterRequest>,
) -> ContentResult<NewsletterResponse> {
    Ok(Json(state.content.newsletter(req).await?))
}

pub async fn handle_optimize_menu(
    State(state): State<AppState>,
    ContentJson(req): ContentJson<MenuRequest>,
) -> ContentResult<MenuResponse> {
    Ok(Json(state.content.menu_description(req).await?))
}

pub async fn handle_generate_review_response(
    State(state): State<AppState>,
    ContentJson(req): ContentJson<ReviewRequest>,
) -> ContentResult<ReviewResponse> {
    Ok(Json(state.content.review_response(req).await?))
}

pub async fn handle_test_connection(State(state): State<AppState>) -> ContentResult<ConnectionTestResponse> {
    Ok(Json(state.content.test_connection().await?))
}
