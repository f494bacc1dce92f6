use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use restaurant_core::{create_app, AppConfig, AppState, FakeBackend, LeadWriter};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const CONTENT_POSTS: [&str; 4] = [
    "/api/ai/generate-social-media",
    "/api/ai/generate-newsletter",
    "/api/ai/optimize-menu",
    "/api/ai/generate-review-response",
];

fn setup_app(backend: Arc<FakeBackend>) -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let leads = LeadWriter::spawn(dir.path().join("leads.txt"));
    let state = AppState::new(backend, leads);
    (create_app(state, &AppConfig::default()), dir)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_empty_bodies_succeed_with_defaults() {
    let backend = Arc::new(FakeBackend::replying("generated"));
    let (app, _dir) = setup_app(backend.clone());

    for uri in CONTENT_POSTS {
        let (status, body) = send(app.clone(), Method::POST, uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["success"], json!(true), "{}", uri);
        assert!(body["timestamp"].is_string(), "{}", uri);
    }

    assert_eq!(backend.requests().len(), 4);
}

#[tokio::test]
async fn test_social_media_response_shape() {
    let backend = Arc::new(FakeBackend::replying("Heute frische Muscheln! 🦪"));
    let (app, _dir) = setup_app(backend.clone());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/ai/generate-social-media",
        Some(json!({
            "restaurant_name": "Fischhaus Nord",
            "cuisine_type": "Seafood",
            "platform": "instagram",
            "language": "english"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Heute frische Muscheln! 🦪");
    assert_eq!(body["platform"], "instagram");
    assert_eq!(body["restaurant"], "Fischhaus Nord");

    let prompt = backend.last_request().unwrap().user_prompt().unwrap().to_string();
    assert!(prompt.starts_with("Create an engaging social media post for Fischhaus Nord, a Seafood restaurant."));
    assert!(prompt.contains("- Occasion: daily post"));
}

#[tokio::test]
async fn test_language_is_case_insensitive() {
    let backend = Arc::new(FakeBackend::replying("ok"));
    let (app, _dir) = setup_app(backend.clone());

    send(
        app,
        Method::POST,
        "/api/ai/optimize-menu",
        Some(json!({"dish_name": "Schnitzel", "language": "GeRmAn"})),
    )
    .await;

    let prompt = backend.last_request().unwrap().user_prompt().unwrap().to_string();
    assert!(prompt.starts_with("Erstelle eine appetitliche Menü-Beschreibung für:"));
    assert!(prompt.contains("Gericht: Schnitzel"));
}

#[tokio::test]
async fn test_newsletter_passes_structured_output_through() {
    let backend = Arc::new(FakeBackend::replying(
        r#"  {"subject": "Spargelzeit bei Bella", "content": "Liebe Gäste, ..."}  "#,
    ));
    let (app, _dir) = setup_app(backend);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/ai/generate-newsletter",
        Some(json!({"restaurant_name": "Bella", "specials": ["Spargel"]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["newsletter"],
        json!({"subject": "Spargelzeit bei Bella", "content": "Liebe Gäste, ..."})
    );
    assert_eq!(body["restaurant"], "Bella");
}

#[tokio::test]
async fn test_newsletter_keeps_sectioned_content() {
    let backend = Arc::new(FakeBackend::replying(
        r#"{"subject": "Spargelzeit", "content": ["Abschnitt 1", "Abschnitt 2", "Abschnitt 3"]}"#,
    ));
    let (app, _dir) = setup_app(backend);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/ai/generate-newsletter",
        Some(json!({"restaurant_name": "Bella"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newsletter"]["subject"], "Spargelzeit");
    assert_eq!(
        body["newsletter"]["content"],
        json!(["Abschnitt 1", "Abschnitt 2", "Abschnitt 3"])
    );
}

#[tokio::test]
async fn test_newsletter_falls_back_to_raw_text() {
    let raw = "Betreff: Neues aus der Küche\n\nLiebe Gäste ...";
    let backend = Arc::new(FakeBackend::replying(raw));
    let (app, _dir) = setup_app(backend);

    let (_, body) = send(app, Method::POST, "/api/ai/generate-newsletter", Some(json!({}))).await;

    assert_eq!(body["newsletter"]["subject"], "Newsletter von Restaurant");
    assert_eq!(body["newsletter"]["content"], raw);
}

#[tokio::test]
async fn test_menu_and_review_echo_fields() {
    let backend = Arc::new(FakeBackend::new()
        .with_response("menü-beschreibung", "Zarte Rinderroulade ...")
        .with_response("kundenbewertung", "Vielen Dank für Ihr Feedback!"));
    let (app, _dir) = setup_app(backend);

    let (_, menu) = send(
        app.clone(),
        Method::POST,
        "/api/ai/optimize-menu",
        Some(json!({"dish_name": "Rinderroulade", "price": "18,90 €", "ingredients": ["Rind", "Rotkohl"]})),
    )
    .await;
    assert_eq!(menu["dish_name"], "Rinderroulade");
    assert_eq!(menu["price"], "18,90 €");
    assert_eq!(menu["description"], "Zarte Rinderroulade ...");

    let (_, review) = send(
        app,
        Method::POST,
        "/api/ai/generate-review-response",
        Some(json!({"review_text": "Zu lange gewartet", "rating": 2})),
    )
    .await;
    assert_eq!(review["original_review"], "Zu lange gewartet");
    assert_eq!(review["rating"], 2);
    assert_eq!(review["restaurant"], "Restaurant");
    assert_eq!(review["response"], "Vielen Dank für Ihr Feedback!");
}

#[tokio::test]
async fn test_connection_endpoint() {
    let backend = Arc::new(FakeBackend::replying("Hallo"));
    let (app, _dir) = setup_app(backend);

    let (status, body) = send(app, Method::GET, "/api/ai/test-connection", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["test_response"], "Hallo");
    assert_eq!(body["message"], "OpenAI API connection successful");
}

#[tokio::test]
async fn test_upstream_failure_maps_to_500_everywhere() {
    let backend = Arc::new(FakeBackend::failing("connection refused"));
    let (app, _dir) = setup_app(backend);

    let mut calls: Vec<(Method, &str, Option<Value>)> = CONTENT_POSTS
        .iter()
        .map(|uri| (Method::POST, *uri, Some(json!({}))))
        .collect();
    calls.push((Method::GET, "/api/ai/test-connection", None));

    for (method, uri, body) in calls {
        let (status, body) = send(app.clone(), method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["success"], json!(false), "{}", uri);
        assert!(!body["error"].as_str().unwrap().is_empty(), "{}", uri);
        assert_eq!(body["kind"], "transport", "{}", uri);
        assert!(!body.to_string().contains("connection refused"), "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_500() {
    let backend = Arc::new(FakeBackend::replying("unused"));
    let (app, _dir) = setup_app(backend.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/ai/generate-social-media")
        .header("content-type", "application/json")
        .body(Body::from("{\"restaurant_name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "invalid_request");

    let (status, body) = send(
        app,
        Method::POST,
        "/api/ai/generate-newsletter",
        Some(json!({"events": "not a list"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_custom_route_prefix() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(
        Arc::new(FakeBackend::replying("Hallo")),
        LeadWriter::spawn(dir.path().join("leads.txt")),
    );
    let mut config = AppConfig::default();
    config.content.route_prefix = "/".to_string();
    let app = create_app(state, &config);

    let (status, _) = send(app.clone(), Method::GET, "/test-connection", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app, Method::GET, "/api/ai/test-connection", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dir) = setup_app(Arc::new(FakeBackend::new()));

    let (status, body) = send(app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["model"], "fake-model");
}
