// ABOUTME: Route module organization for the Morizo web server HTTP API
// ABOUTME: Assembles domain routers and wraps them with CORS and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! Route module for the Morizo web server
//!
//! Each submodule owns one domain and exposes a `*Routes` type with a
//! `routes()` constructor. [`build_router`] merges them and applies the
//! cross-cutting layers.

/// Health and readiness endpoints
pub mod health;
/// Missing-ingredient check
pub mod ingredients;
/// Menu history proxy
pub mod menu;
/// Subscription usage proxy
pub mod subscription;
/// Voice transcription
pub mod voice;
/// Subscription webhook forwarding
pub mod webhooks;

use std::sync::Arc;
use std::time::Instant;

use axum::response::Response;
use axum::Router;
use morizo_core::errors::AppResult;

use crate::logging::AppLogger;
use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use menu::MenuRoutes;
pub use subscription::SubscriptionRoutes;
pub use voice::VoiceRoutes;
pub use webhooks::WebhookRoutes;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    let router = Router::new()
        .merge(HealthRoutes::routes())
        .merge(IngredientRoutes::routes(Arc::clone(&resources)))
        .merge(SubscriptionRoutes::routes(Arc::clone(&resources)))
        .merge(MenuRoutes::routes(Arc::clone(&resources)))
        .merge(VoiceRoutes::routes(Arc::clone(&resources)))
        .merge(WebhookRoutes::routes(resources))
        .layer(cors);

    with_request_tracing(router)
}

/// Record the outcome of an API call and tag failures with the request id
pub(crate) fn log_outcome(
    method: &str,
    path: &str,
    started: Instant,
    request_id: Option<String>,
    result: AppResult<Response>,
) -> AppResult<Response> {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(response) => {
            AppLogger::log_api_request(method, path, response.status().as_u16(), duration_ms, None);
            Ok(response)
        }
        Err(error) => {
            AppLogger::log_api_request(
                method,
                path,
                error.http_status(),
                duration_ms,
                Some(&error.message),
            );
            Err(match request_id {
                Some(id) => error.with_request_id(id),
                None => error,
            })
        }
    }
}
