//! Content-generation request and response models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_restaurant_name() -> String {
    "Restaurant".to_string()
}

fn default_cuisine_type() -> String {
    "International".to_string()
}

fn default_language() -> String {
    "german".to_string()
}

fn default_occasion() -> String {
    "daily post".to_string()
}

fn default_platform() -> String {
    "facebook".to_string()
}

fn default_rating() -> Value {
    Value::from(5)
}

fn default_price() -> Value {
    Value::String(String::new())
}

/// Text form of an echoed JSON field as it appears inside a prompt:
/// strings verbatim, everything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialMediaRequest {
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default = "default_cuisine_type")]
    pub cuisine_type: String,
    #[serde(default)]
    pub special_dish: String,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default = "default_cuisine_type")]
    pub cuisine_type: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub specials: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuRequest {
    #[serde(default)]
    pub dish_name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default = "default_price")]
    pub price: Value,
    #[serde(default = "default_cuisine_type")]
    pub cuisine_type: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub review_text: String,
    #[serde(default = "default_rating")]
    pub rating: Value,
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct SocialMediaResponse {
    pub success: bool,
    pub content: String,
    pub platform: String,
    pub restaurant: String,
    pub timestamp: String,
}

/// Newsletter as returned to the caller. `subject` and `content` carry
/// whatever JSON the completion produced for them, and any further keys of
/// that object are kept alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Newsletter {
    pub subject: Value,
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Newsletter {
    /// Passes a JSON object with `subject` and `content` keys through
    /// unchanged; any other text becomes the body under a default subject.
    pub fn from_completion(text: &str, restaurant_name: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(mut fields))
                if fields.contains_key("subject") && fields.contains_key("content") =>
            {
                let subject = fields.remove("subject").unwrap_or_default();
                let content = fields.remove("content").unwrap_or_default();
                Newsletter { subject, content, extra: fields }
            }
            _ => Newsletter {
                subject: Value::String(format!("Newsletter von {}", restaurant_name)),
                content: Value::String(text.to_string()),
                extra: Map::new(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub success: bool,
    pub newsletter: Newsletter,
    pub restaurant: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub success: bool,
    pub dish_name: String,
    pub description: String,
    pub price: Value,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub original_review: String,
    pub rating: Value,
    pub response: String,
    pub restaurant: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectionTestResponse {
    pub success: bool,
    pub message: String,
    pub test_response: String,
}
