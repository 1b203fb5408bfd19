// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Routes, upstream paths, upload limits, CORS values and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Service names for structured logging
pub mod service_names {
    /// Web server service name
    pub const MORIZO_WEB: &str = "morizo-web";
    /// Upstream meal-planning AI service
    pub const MORIZO_AI: &str = "Morizo AI";
    /// Speech-to-text service
    pub const TRANSCRIPTION: &str = "OpenAI Whisper";
}

/// Routes served by this server
pub mod routes {
    /// Health route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
    /// Missing-ingredient check
    pub const CHECK_MISSING_INGREDIENTS: &str = "/api/recipe/ingredients/check-missing";
    /// Subscription usage proxy
    pub const SUBSCRIPTION_USAGE: &str = "/api/subscription/usage";
    /// Menu history entry proxy
    pub const MENU_HISTORY_ENTRY: &str = "/api/menu/history/:history_id";
    /// Voice transcription
    pub const WHISPER: &str = "/api/whisper";
    /// Subscription webhook forwarding
    pub const REVENUECAT_WEBHOOK: &str = "/api/revenuecat/webhook";
}

/// Paths on the upstream Morizo AI service
pub mod upstream {
    /// Subscription usage
    pub const SUBSCRIPTION_USAGE: &str = "/api/subscription/usage";
    /// Menu history prefix; the history id is appended
    pub const MENU_HISTORY: &str = "/api/menu/history";
    /// Subscription webhook
    pub const REVENUECAT_WEBHOOK: &str = "/api/revenuecat/webhook";
    /// Transcription endpoint, relative to the OpenAI API base
    pub const AUDIO_TRANSCRIPTIONS: &str = "/audio/transcriptions";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}

/// Default configuration values
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default upstream AI service URL
    pub const MORIZO_AI_URL: &str = "http://localhost:8000";
    /// Default OpenAI API base
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
    /// Default transcription model
    pub const WHISPER_MODEL: &str = "whisper-1";
    /// Default transcription language
    pub const WHISPER_LANGUAGE: &str = "ja";
    /// Allowed CORS origin in production when none is configured
    pub const PRODUCTION_ORIGIN: &str = "https://morizo.csngrp.co.jp";
    /// Upstream request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Upstream connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Upstream AI service URL
    pub const MORIZO_AI_URL: &str = "MORIZO_AI_URL";
    /// OpenAI API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// OpenAI API base URL
    pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";
    /// Transcription model
    pub const WHISPER_MODEL: &str = "WHISPER_MODEL";
    /// Transcription language
    pub const WHISPER_LANGUAGE: &str = "WHISPER_LANGUAGE";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Upstream request timeout
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Upstream connect timeout
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Deployment environment, Node-style fallback
    pub const NODE_ENV: &str = "NODE_ENV";
}

/// CORS values
pub mod cors {
    /// Preflight cache lifetime in seconds
    pub const MAX_AGE_SECS: u64 = 86_400;
}

/// Request limits
pub mod limits {
    /// Maximum accepted audio upload (10 MiB)
    pub const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;
    /// Request body limit for the transcription route; leaves room for multipart framing
    pub const MAX_AUDIO_REQUEST_BYTES: usize = MAX_AUDIO_BYTES + 1024 * 1024;
    /// Characters of a transcription kept in logs
    pub const TRANSCRIPTION_PREVIEW_CHARS: usize = 50;
}

/// Audio upload formats
pub mod audio {
    /// Multipart field carrying the audio file
    pub const FORM_FIELD: &str = "audio";
    /// Accepted MIME types
    pub const ALLOWED_MIME_TYPES: &[&str] = &[
        "audio/mpeg",
        "audio/wav",
        "audio/webm",
        "audio/ogg",
        "audio/mp4",
        "audio/x-m4a",
    ];
}
