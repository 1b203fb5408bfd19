// ABOUTME: HTTP tests for the missing-ingredient route, health routes, and cross-cutting layers
// ABOUTME: Exercises validation order, bearer auth, CORS preflight, and request id propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::fake_upstream::unreachable_base_url;
use helpers::test_utils::{resources_for, router_with};
use serde_json::{json, Value};

const CHECK_MISSING: &str = "/api/recipe/ingredients/check-missing";

fn app() -> axum::Router {
    router_with(resources_for(&unreachable_base_url()))
}

#[tokio::test]
async fn test_check_missing_returns_missing_list() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .bearer("session-token-1234")
        .json(&json!({
            "recipeIngredients": ["豚バラ肉", "キャベツ", "醤油", "ニンジン"],
            "availableIngredients": ["豚バラ", "にんじん"]
        }))
        .send(app())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["missingIngredients"], json!(["キャベツ"]));
}

#[tokio::test]
async fn test_check_missing_with_empty_inventory_returns_empty_list() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .bearer("session-token-1234")
        .json(&json!({
            "recipeIngredients": ["キャベツ"],
            "availableIngredients": []
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["missingIngredients"], json!([]));
}

#[tokio::test]
async fn test_recipe_ingredients_must_be_array() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .bearer("session-token-1234")
        .json(&json!({
            "recipeIngredients": "キャベツ",
            "availableIngredients": []
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "recipeIngredients must be an array");
}

#[tokio::test]
async fn test_available_ingredients_must_be_array() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .bearer("session-token-1234")
        .json(&json!({ "recipeIngredients": ["キャベツ"] }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "availableIngredients must be an array");
}

#[tokio::test]
async fn test_validation_runs_before_authentication() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .json(&json!({ "recipeIngredients": null }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_missing_bearer_is_unauthorized() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .json(&json!({
            "recipeIngredients": ["キャベツ"],
            "availableIngredients": ["卵"]
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .header("authorization", "Basic dXNlcjpwYXNz")
        .json(&json!({
            "recipeIngredients": ["キャベツ"],
            "availableIngredients": ["卵"]
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .bearer("session-token-1234")
        .body("application/json", b"{not json".to_vec())
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_response_carries_generated_request_id() {
    let response = AxumTestRequest::get("/health").send(app()).await;

    assert_eq!(response.status(), 200);
    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() {
    let response = AxumTestRequest::get("/ready")
        .header("x-request-id", "req-from-client")
        .send(app())
        .await;

    assert_eq!(response.header("x-request-id"), Some("req-from-client"));
}

#[tokio::test]
async fn test_error_body_carries_request_id() {
    let response = AxumTestRequest::post(CHECK_MISSING)
        .header("x-request-id", "req-42")
        .json(&json!({ "availableIngredients": [] }))
        .send(app())
        .await;

    let body: Value = response.json();
    assert_eq!(body["request_id"], "req-42");
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let response = AxumTestRequest::options(CHECK_MISSING)
        .header("origin", "https://app.example.test")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,authorization")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-max-age"), Some("86400"));
    let methods = response
        .header("access-control-allow-methods")
        .unwrap()
        .to_ascii_uppercase();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_health_and_ready() {
    let health: Value = AxumTestRequest::get("/health").send(app()).await.json();
    assert_eq!(health["status"], "healthy");
    assert!(health["timestamp"].is_string());

    let ready: Value = AxumTestRequest::get("/ready").send(app()).await.json();
    assert_eq!(ready["status"], "ready");
}
