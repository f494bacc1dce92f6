//! Request tracing for the HTTP surface

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
};
use tracing::{info_span, Span};

/// Coarse label for the span, so content calls and lead captures can be
/// filtered apart in the logs.
fn route_group(path: &str) -> &'static str {
    match path {
        "/api/lead" => "lead",
        "/health" => "health",
        _ => "content",
    }
}

pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    impl OnFailure<ServerErrorsFailureClass> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let path = request.uri().path();
            info_span!(
                "http_request",
                method = %request.method(),
                path = %path,
                group = route_group(path),
            )
        })
        .on_request(|_request: &Request<Body>, _span: &Span| {
            tracing::debug!("request received");
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
            let status = response.status().as_u16();
            let latency_ms = latency.as_millis() as u64;

            if response.status().is_server_error() {
                tracing::error!(status, latency_ms, "request failed");
            } else if response.status().is_client_error() {
                tracing::warn!(status, latency_ms, "request rejected");
            } else {
                tracing::info!(status, latency_ms, "request completed");
            }
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!(latency_ms = latency.as_millis() as u64, error = %error, "request errored");
        })
}
