// ABOUTME: Menu history route proxying deletions to the Morizo AI backend
// ABOUTME: Relays the upstream JSON body unchanged on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::delete,
    Json, Router,
};
use morizo_core::constants::{routes, upstream};
use morizo_core::errors::{AppError, AppResult};
use tracing::info;

use super::log_outcome;
use crate::middleware::{request_id, BearerToken};
use crate::resources::ServerResources;

/// Menu history routes
pub struct MenuRoutes;

impl MenuRoutes {
    /// Create all menu history routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::MENU_HISTORY_ENTRY, delete(Self::handle_delete_history))
            .with_state(resources)
    }

    /// Handle `DELETE /api/menu/history/:history_id`
    async fn handle_delete_history(
        State(resources): State<Arc<ServerResources>>,
        Path(history_id): Path<String>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let path = format!("{}/{history_id}", upstream::MENU_HISTORY);
        info!(history_id = %history_id, "Menu history deletion requested");

        let result = Self::delete_history(&resources, &headers, &history_id).await;
        log_outcome("DELETE", &path, started, request_id(&headers), result)
    }

    async fn delete_history(
        resources: &ServerResources,
        headers: &HeaderMap,
        history_id: &str,
    ) -> AppResult<Response> {
        let token = BearerToken::from_headers(headers)?;
        let body = resources
            .morizo_ai
            .delete_menu_history(&token, history_id)
            .await?;
        Ok((StatusCode::OK, Json(body)).into_response())
    }
}
