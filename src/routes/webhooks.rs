// ABOUTME: RevenueCat webhook route forwarding purchase events to the Morizo AI backend
// ABOUTME: Passes the Authorization header through so the backend can verify the webhook secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use morizo_core::constants::routes;
use morizo_core::errors::{AppError, AppResult, ErrorCode};
use serde_json::Value;
use tracing::info;

use super::log_outcome;
use crate::middleware::request_id;
use crate::resources::ServerResources;

/// Webhook routes
pub struct WebhookRoutes;

impl WebhookRoutes {
    /// Create all webhook routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::REVENUECAT_WEBHOOK, post(Self::handle_revenuecat))
            .with_state(resources)
    }

    /// Handle `POST /api/revenuecat/webhook`
    async fn handle_revenuecat(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let result = Self::forward(&resources, &headers, body).await;
        log_outcome(
            "POST",
            routes::REVENUECAT_WEBHOOK,
            started,
            request_id(&headers),
            result,
        )
    }

    async fn forward(
        resources: &ServerResources,
        headers: &HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(event) =
            body.map_err(|rejection| AppError::new(ErrorCode::InvalidFormat, rejection.body_text()))?;

        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let event_type = event.get("type").and_then(Value::as_str).unwrap_or("UNKNOWN");
        let app_user_id = event.get("app_user_id").and_then(Value::as_str).unwrap_or("");
        info!(event_type, app_user_id, "RevenueCat webhook received");

        let reply = resources
            .morizo_ai
            .forward_revenuecat_webhook(authorization, &event)
            .await?;
        Ok((StatusCode::OK, Json(reply)).into_response())
    }
}
