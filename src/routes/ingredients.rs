// ABOUTME: Missing-ingredient check route for recipe screens
// ABOUTME: Validates the two ingredient lists, requires a bearer token, and runs the local matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! Missing-ingredient route
//!
//! `POST /api/recipe/ingredients/check-missing` answers which recipe
//! ingredients are not covered by the user's pantry. Matching runs in-process;
//! no upstream call is made.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use morizo_core::constants::routes;
use morizo_core::errors::{AppError, AppResult, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::log_outcome;
use crate::middleware::{request_id, BearerToken};
use crate::resources::ServerResources;

const RECIPE_FIELD: &str = "recipeIngredients";
const AVAILABLE_FIELD: &str = "availableIngredients";

/// Successful check-missing response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMissingResponse {
    /// Always `true`
    pub success: bool,
    /// Recipe ingredients the user lacks, in recipe order
    pub missing_ingredients: Vec<String>,
}

/// Ingredient routes
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::CHECK_MISSING_INGREDIENTS,
                post(Self::handle_check_missing),
            )
            .with_state(resources)
    }

    async fn handle_check_missing(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let result = Self::check_missing(&resources, &headers, body);
        log_outcome(
            "POST",
            routes::CHECK_MISSING_INGREDIENTS,
            started,
            request_id(&headers),
            result,
        )
    }

    fn check_missing(
        resources: &ServerResources,
        headers: &HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(body) =
            body.map_err(|rejection| AppError::new(ErrorCode::InvalidFormat, rejection.body_text()))?;

        // Both lists are validated before the caller is authenticated
        let recipe = string_list(&body, RECIPE_FIELD)?;
        let available = string_list(&body, AVAILABLE_FIELD)?;

        let token = BearerToken::from_headers(headers)?;
        info!(
            token = %token.masked(),
            recipe_count = recipe.len(),
            available_count = available.len(),
            "Checking missing ingredients"
        );

        let matcher = &resources.ingredient_matcher;
        let missing = matcher.missing_ingredients(&recipe, &available);
        debug!(missing = ?missing, "Missing ingredients resolved");

        let response = CheckMissingResponse {
            success: true,
            missing_ingredients: missing,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

/// Read `field` as a list of strings
fn string_list<'a>(body: &'a Value, field: &str) -> AppResult<Vec<&'a str>> {
    let items = body
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::invalid_input(format!("{field} must be an array")))?;

    items
        .iter()
        .map(|item| {
            item.as_str().ok_or_else(|| {
                AppError::invalid_input(format!("{field} must be an array of strings"))
            })
        })
        .collect()
}
