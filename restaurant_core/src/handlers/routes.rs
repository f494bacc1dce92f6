//! Route table

use crate::{
    config::ContentConfig,
    error::AppError,
    handlers::{content, health, leads},
    AppState,
};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

pub fn create_routes(content_config: &ContentConfig) -> Router<AppState> {
    let prefix = content_config.route_prefix.trim_end_matches('/');

    let router = Router::new()
        .route("/health", get(health::handle_health))
        .route("/api/lead", post(leads::handle_capture_lead));

    // axum refuses to nest at the root, so an empty prefix merges instead.
    let router = if prefix.is_empty() {
        router.merge(content_routes())
    } else {
        router.nest(prefix, content_routes())
    };

    router.fallback(handle_not_found)
}

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-social-media", post(content::handle_generate_social_media))
        .route("/generate-newsletter", post(content::handle_generate_newsletter))
        .route("/optimize-menu", post(content::handle_optimize_menu))
        .route("/generate-review-response", post(content::handle_generate_review_response))
        .route("/test-connection", get(content::handle_test_connection))
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
