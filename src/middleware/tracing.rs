// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates x-request-id values and creates one span per HTTP request

use axum::Router;
use http::{HeaderMap, HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Header carrying the request id on requests and responses
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Read the request id assigned by [`with_request_tracing`]
#[must_use]
pub fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Create a tracing span for HTTP requests
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request_id(request.headers()).unwrap_or_default(),
        user_agent = request
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(""),
    )
}

/// Wrap a router with request id generation, propagation, and a trace span.
///
/// An incoming `x-request-id` is kept; otherwise a UUID is generated. The id
/// is echoed on the response.
pub fn with_request_tracing(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    // Layers run outermost-first: set the id, then trace, then propagate.
    router
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}
