// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the web and mobile clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::time::Duration;

use http::{header, HeaderValue, Method};
use morizo_core::constants::cors::MAX_AGE_SECS;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Configure CORS settings for the API routes
///
/// Configures cross-origin requests based on `CORS_ALLOWED_ORIGINS`.
/// Supports both wildcard ("*") for development and specific origin lists
/// for production. Preflight responses are cached by browsers for a day.
///
/// # Allowed Headers
///
/// - content-type, authorization, cache-control
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://morizo.csngrp.co.jp,https://admin.example.com"
/// ```
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_allowed_origins(&config.allowed_origins))
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::CACHE_CONTROL,
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(MAX_AGE_SECS))
}

fn parse_allowed_origins(allowed_origins: &str) -> AllowOrigin {
    if allowed_origins.is_empty() || allowed_origins == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect();

    if origins.is_empty() {
        // Fallback to any if parsing failed
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
