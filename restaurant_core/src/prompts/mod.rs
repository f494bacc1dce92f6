//! Prompt template table.
//!
//! Each [`PromptKind`] carries its sampling settings and one template per
//! [`Language`]. Templates are Handlebars sources rendered in strict mode,
//! so a missing variable is an error rather than an empty string.

mod templates;

pub use templates::CONNECTION_TEST_PROMPT;

use crate::completion::{ChatMessage, CompletionRequest};
use handlebars::{Handlebars, RenderError};
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref PROMPTS: Handlebars<'static> = {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        // Prompts are plain text, not HTML.
        hb.register_escape_fn(handlebars::no_escape);
        hb
    };
}

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const CONNECTION_TEST_MAX_TOKENS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    German,
    English,
}

impl Language {
    /// `"german"` in any case selects German, everything else English.
    pub fn from_field(value: &str) -> Self {
        if value.to_lowercase() == "german" {
            Language::German
        } else {
            Language::English
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SocialMedia,
    Newsletter,
    MenuDescription,
    ReviewResponse,
}

impl PromptKind {
    pub fn system_instruction(self) -> &'static str {
        match self {
            PromptKind::SocialMedia => templates::SOCIAL_MEDIA_SYSTEM,
            PromptKind::Newsletter => templates::NEWSLETTER_SYSTEM,
            PromptKind::MenuDescription => templates::MENU_SYSTEM,
            PromptKind::ReviewResponse => templates::REVIEW_SYSTEM,
        }
    }

    pub fn max_tokens(self) -> u32 {
        match self {
            PromptKind::Newsletter => 1000,
            PromptKind::SocialMedia | PromptKind::MenuDescription | PromptKind::ReviewResponse => 300,
        }
    }

    pub fn template(self, language: Language) -> &'static str {
        match (self, language) {
            (PromptKind::SocialMedia, Language::German) => templates::SOCIAL_MEDIA_DE,
            (PromptKind::SocialMedia, Language::English) => templates::SOCIAL_MEDIA_EN,
            (PromptKind::Newsletter, Language::German) => templates::NEWSLETTER_DE,
            (PromptKind::Newsletter, Language::English) => templates::NEWSLETTER_EN,
            (PromptKind::MenuDescription, Language::German) => templates::MENU_DE,
            (PromptKind::MenuDescription, Language::English) => templates::MENU_EN,
            (PromptKind::ReviewResponse, Language::German) => templates::REVIEW_DE,
            (PromptKind::ReviewResponse, Language::English) => templates::REVIEW_EN,
        }
    }

    pub fn render(self, language: Language, context: &Value) -> Result<String, RenderError> {
        PROMPTS.render_template(self.template(language), context)
    }

    /// Renders the template and wraps it with the system instruction and
    /// sampling settings for this kind.
    pub fn build_request(
        self,
        language: Language,
        context: &Value,
    ) -> Result<CompletionRequest, RenderError> {
        let prompt = self.render(language, context)?;
        Ok(CompletionRequest::new(
            vec![
                ChatMessage::system(self.system_instruction()),
                ChatMessage::user(prompt),
            ],
            self.max_tokens(),
        )
        .with_temperature(DEFAULT_TEMPERATURE))
    }
}

/// Placeholder text for list fields that arrive empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyList {
    Events,
    Specials,
    Ingredients,
}

impl EmptyList {
    pub fn placeholder(self, language: Language) -> &'static str {
        match (self, language) {
            (EmptyList::Events, Language::German) => "Keine besonderen Events",
            (EmptyList::Events, Language::English) => "No special events",
            (EmptyList::Specials, Language::German) => "Keine besonderen Angebote",
            (EmptyList::Specials, Language::English) => "No special offers",
            (EmptyList::Ingredients, Language::German) => "Nicht angegeben",
            (EmptyList::Ingredients, Language::English) => "Not specified",
        }
    }
}

pub fn join_or_placeholder(items: &[String], empty: EmptyList, language: Language) -> String {
    if items.is_empty() {
        empty.placeholder(language).to_string()
    } else {
        items.join(", ")
    }
}
