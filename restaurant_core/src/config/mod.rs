pub mod settings;

pub use settings::{AppConfig, CompletionConfig, ContentConfig, CorsConfig, LeadConfig, ServerConfig};
