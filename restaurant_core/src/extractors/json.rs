//! JSON extractor for the content endpoints.
//!
//! Any rejection from `axum::Json` (missing content type, syntax error,
//! wrong field types) surfaces as [`ContentError::InvalidRequest`], so the
//! caller always gets the `{success: false, ...}` shape.

use crate::content::ContentError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

pub struct ContentJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ContentJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ContentError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ContentJson(value)),
            Err(rejection) => Err(ContentError::InvalidRequest(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_json() {
        let ContentJson(probe) = ContentJson::<Probe>::from_request(json_request(r#"{"name":"Bella"}"#), &())
            .await
            .unwrap();
        assert_eq!(probe.name, "Bella");
    }

    #[tokio::test]
    async fn test_syntax_error_is_invalid_request() {
        let result = ContentJson::<Probe>::from_request(json_request("{not json"), &()).await;
        assert!(matches!(result, Err(ContentError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid_request() {
        let request = Request::builder()
            .method("POST")
            .body(Body::from("{}"))
            .unwrap();
        let result = ContentJson::<Probe>::from_request(request, &()).await;
        assert!(matches!(result, Err(ContentError::InvalidRequest(_))));
    }
}
