// ABOUTME: Centralized resource container shared by every route handler
// ABOUTME: Holds configuration, the ingredient matcher, and the upstream service clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! # Server Resources
//!
//! Built once at startup and handed to the router as axum state, so handlers
//! never recreate clients or the matcher per request.

use std::sync::Arc;

use morizo_intelligence::ingredients::IngredientMatcher;

use crate::config::ServerConfig;
use crate::external::{transcriber_from_config, MorizoAiClient, SpeechTranscriber};

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Missing-ingredient matcher with the staple denylist
    pub ingredient_matcher: Arc<IngredientMatcher>,
    /// Morizo AI backend client
    pub morizo_ai: MorizoAiClient,
    /// Speech-to-text service
    pub transcriber: Arc<dyn SpeechTranscriber>,
}

impl ServerResources {
    /// Create resources from configuration
    ///
    /// Upstream clients share the process-wide HTTP connection pool.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let morizo_ai = MorizoAiClient::new(&config.morizo_ai);
        let transcriber = transcriber_from_config(&config.transcription);

        Self {
            config: Arc::new(config),
            ingredient_matcher: Arc::new(IngredientMatcher::default()),
            morizo_ai,
            transcriber,
        }
    }

    /// Replace the transcriber
    #[must_use]
    pub fn with_transcriber(mut self, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        self.transcriber = transcriber;
        self
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("environment", &self.config.environment)
            .field("ingredient_matcher", &self.ingredient_matcher)
            .field("morizo_ai", &self.morizo_ai)
            .finish_non_exhaustive()
    }
}
