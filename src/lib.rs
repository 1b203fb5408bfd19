// ABOUTME: Main library entry point for the Morizo web server
// ABOUTME: Missing-ingredient checks plus thin proxies to the Morizo AI backend and speech-to-text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

#![deny(unsafe_code)]

//! # Morizo Web Server
//!
//! HTTP backend for the Morizo pantry and meal-planning app. The server
//! answers one question itself, which recipe ingredients the user is missing,
//! and forwards everything else.
//!
//! ## Features
//!
//! - **Missing-ingredient check**: kana- and case-insensitive matching with a
//!   staple denylist (see `morizo_intelligence::ingredients`)
//! - **Morizo AI proxy**: subscription usage, menu history deletion,
//!   RevenueCat webhooks, authenticated with the caller's bearer token
//! - **Voice input**: audio upload transcription via OpenAI Whisper
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use morizo_web::config::ServerConfig;
//! use morizo_web::resources::ServerResources;
//! use morizo_web::routes::build_router;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let addr = format!("{}:{}", config.host, config.http_port);
//!     let router = build_router(Arc::new(ServerResources::new(config)));
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Error types, re-exported from `morizo-core`
pub mod errors {
    pub use morizo_core::errors::*;
}

/// Upstream service clients
pub mod external;

/// Logging setup and structured logging helpers
pub mod logging;

/// HTTP middleware: authentication, CORS, request tracing
pub mod middleware;

/// Shared resources handed to every route
pub mod resources;

/// HTTP routes
pub mod routes;

pub use morizo_intelligence::ingredients;
