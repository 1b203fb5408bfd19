// ABOUTME: Shared HTTP client with connection pooling for upstream API calls
// ABOUTME: Singleton pattern with configurable timeouts initialized at server startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::sync::OnceLock;
use std::time::Duration;

use morizo_core::constants::defaults::{
    HTTP_CLIENT_CONNECT_TIMEOUT_SECS, HTTP_CLIENT_TIMEOUT_SECS,
};
use reqwest::{Client, ClientBuilder};

use crate::config::HttpClientConfig;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at server startup before any upstream client is built.
/// If not called, defaults are used (30s timeout, 10s connect timeout).
pub fn initialize_shared_client(config: HttpClientConfig) {
    let _ = CLIENT_TIMEOUTS.set((config.timeout_secs, config.connect_timeout_secs));
}

/// Get the shared HTTP client for upstream API calls
///
/// This client uses connection pooling and the configured timeouts.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((HTTP_CLIENT_TIMEOUT_SECS, HTTP_CLIENT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
