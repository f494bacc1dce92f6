use super::error::ContentError;
use crate::completion::{ChatMessage, CompletionBackend, CompletionRequest};
use crate::models::content::{
    value_text, ConnectionTestResponse, MenuRequest, MenuResponse, Newsletter, NewsletterRequest,
    NewsletterResponse, ReviewRequest, ReviewResponse, SocialMediaRequest, SocialMediaResponse,
};
use crate::prompts::{
    join_or_placeholder, EmptyList, Language, PromptKind, CONNECTION_TEST_MAX_TOKENS,
    CONNECTION_TEST_PROMPT,
};
use crate::timestamp::now_iso;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Clone, Debug)]
pub struct ContentService {
    backend: Arc<dyn CompletionBackend>,
}

impl ContentService {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let text = self.backend.complete(request).await?;
        Ok(text.trim().to_string())
    }

    pub async fn social_media(&self, req: SocialMediaRequest) -> Result<SocialMediaResponse> {
        let language = Language::from_field(&req.language);
        info!(restaurant = %req.restaurant_name, platform = %req.platform, ?language, "generating social media post");

        let request = PromptKind::SocialMedia.build_request(
            language,
            &json!({
                "restaurant_name": req.restaurant_name,
                "cuisine_type": req.cuisine_type,
                "platform": req.platform,
                "occasion": req.occasion,
                "special_dish": req.special_dish,
            }),
        )?;
        let content = self.complete(request).await?;

        Ok(SocialMediaResponse {
            success: true,
            content,
            platform: req.platform,
            restaurant: req.restaurant_name,
            timestamp: now_iso(),
        })
    }

    pub async fn newsletter(&self, req: NewsletterRequest) -> Result<NewsletterResponse> {
        let language = Language::from_field(&req.language);
        info!(restaurant = %req.restaurant_name, events = req.events.len(), specials = req.specials.len(), ?language, "generating newsletter");

        let events = join_or_placeholder(&req.events, EmptyList::Events, language);
        let specials = join_or_placeholder(&req.specials, EmptyList::Specials, language);
        let request = PromptKind::Newsletter.build_request(
            language,
            &json!({
                "restaurant_name": req.restaurant_name,
                "cuisine_type": req.cuisine_type,
                "events": events,
                "specials": specials,
            }),
        )?;
        let text = self.complete(request).await?;

        Ok(NewsletterResponse {
            success: true,
            newsletter: Newsletter::from_completion(&text, &req.restaurant_name),
            restaurant: req.restaurant_name,
            timestamp: now_iso(),
        })
    }

    pub async fn menu_description(&self, req: MenuRequest) -> Result<MenuResponse> {
        let language = Language::from_field(&req.language);
        info!(dish = %req.dish_name, ?language, "generating menu description");

        let ingredients = join_or_placeholder(&req.ingredients, EmptyList::Ingredients, language);
        let request = PromptKind::MenuDescription.build_request(
            language,
            &json!({
                "dish_name": req.dish_name,
                "ingredients": ingredients,
                "price": value_text(&req.price),
                "cuisine_type": req.cuisine_type,
            }),
        )?;
        let description = self.complete(request).await?;

        Ok(MenuResponse {
            success: true,
            dish_name: req.dish_name,
            description,
            price: req.price,
            timestamp: now_iso(),
        })
    }

    pub async fn review_response(&self, req: ReviewRequest) -> Result<ReviewResponse> {
        let language = Language::from_field(&req.language);
        info!(restaurant = %req.restaurant_name, rating = %req.rating, ?language, "generating review response");

        let request = PromptKind::ReviewResponse.build_request(
            language,
            &json!({
                "restaurant_name": req.restaurant_name,
                "rating": value_text(&req.rating),
                "review_text": req.review_text,
            }),
        )?;
        let response = self.complete(request).await?;

        Ok(ReviewResponse {
            success: true,
            original_review: req.review_text,
            rating: req.rating,
            response,
            restaurant: req.restaurant_name,
            timestamp: now_iso(),
        })
    }

    pub async fn test_connection(&self) -> Result<ConnectionTestResponse> {
        info!(model = %self.model_name(), "testing completion API connection");

        let request = CompletionRequest::new(
            vec![ChatMessage::user(CONNECTION_TEST_PROMPT)],
            CONNECTION_TEST_MAX_TOKENS,
        );
        let test_response = self.complete(request).await?;

        Ok(ConnectionTestResponse {
            success: true,
            message: "OpenAI API connection successful".to_string(),
            test_response,
        })
    }
}
