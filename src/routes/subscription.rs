// ABOUTME: Subscription usage route proxying the Morizo AI backend
// ABOUTME: Returns today's generation and OCR counters for the signed-in user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use morizo_core::constants::routes;
use morizo_core::errors::{AppError, AppResult};

use super::log_outcome;
use crate::middleware::{request_id, BearerToken};
use crate::resources::ServerResources;

/// Subscription routes
pub struct SubscriptionRoutes;

impl SubscriptionRoutes {
    /// Create all subscription routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::SUBSCRIPTION_USAGE, get(Self::handle_usage))
            .with_state(resources)
    }

    /// Handle `GET /api/subscription/usage`
    async fn handle_usage(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let result = Self::usage(&resources, &headers).await;
        log_outcome(
            "GET",
            routes::SUBSCRIPTION_USAGE,
            started,
            request_id(&headers),
            result,
        )
    }

    async fn usage(resources: &ServerResources, headers: &HeaderMap) -> AppResult<Response> {
        let token = BearerToken::from_headers(headers)?;
        let usage = resources.morizo_ai.subscription_usage(&token).await?;
        Ok((StatusCode::OK, Json(usage)).into_response())
    }
}
