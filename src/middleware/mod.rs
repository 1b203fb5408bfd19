// ABOUTME: HTTP middleware for request tracing, authentication, and CORS
// ABOUTME: Provides request ID generation, span creation, and bearer token extraction

pub mod auth;
pub mod cors;
pub mod tracing;

// Authentication
pub use auth::BearerToken;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{create_request_span, request_id, with_request_tracing, REQUEST_ID_HEADER};
