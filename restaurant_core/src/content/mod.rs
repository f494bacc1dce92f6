pub mod error;
pub mod service;

pub use error::ContentError;
pub use service::ContentService;
