//! Core library for the restaurant marketing service: completion backends,
//! prompt templates, content generation, lead capture and route handlers.

pub mod completion;
pub mod config;
pub mod content;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod leads;
pub mod middleware;
pub mod models;
pub mod prompts;
pub mod timestamp;

pub use completion::{CompletionBackend, CompletionError, FakeBackend, OpenAiBackend};
pub use config::AppConfig;
pub use content::{ContentError, ContentService};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use leads::{LeadRecord, LeadWriter};
pub use middleware::cors::cors_layer_from_config;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub content: ContentService,
    pub leads: LeadWriter,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>, leads: LeadWriter) -> Self {
        Self {
            app_name: "Restaurant Marketing Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            content: ContentService::new(backend),
            leads,
        }
    }

    /// Builds the OpenAI-compatible backend and spawns the lead writer.
    /// Must be called inside a Tokio runtime.
    pub fn from_config(config: &AppConfig) -> std::result::Result<Self, CompletionError> {
        let backend = OpenAiBackend::from_config(&config.completion)?;
        info!("Completion backend: {} (model {})", backend.endpoint(), config.completion.model);

        let leads = LeadWriter::spawn(config.leads.path.clone());
        Ok(Self::new(Arc::new(backend), leads))
    }
}

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes(&config.content))
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
