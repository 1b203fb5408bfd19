// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, upstream URLs, API keys, CORS origins and client timeouts from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use morizo_core::constants::{defaults, env_config, ports};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Upstream Morizo AI service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorizoAiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
}

/// Speech-to-text service
#[derive(Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// API key; transcription is disabled when absent
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL, without trailing slash
    pub api_base: String,
    /// Model name
    pub model: String,
    /// Spoken language hint
    pub language: String,
}

impl TranscriptionConfig {
    /// Whether an API key is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for TranscriptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// Shared outbound HTTP client settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Upstream AI service
    pub morizo_ai: MorizoAiConfig,
    /// Speech-to-text service
    pub transcription: TranscriptionConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Outbound HTTP client settings
    pub http_client: HttpClientConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = var(env_config::ENVIRONMENT)
            .or_else(|| var(env_config::NODE_ENV))
            .map_or_else(Environment::default, |s| Environment::from_str_or_default(&s));

        let allowed_origins = var(env_config::CORS_ALLOWED_ORIGINS).unwrap_or_else(|| {
            if environment.is_production() {
                defaults::PRODUCTION_ORIGIN.to_owned()
            } else {
                "*".to_owned()
            }
        });

        Ok(Self {
            http_port: parse_or(&var, env_config::HTTP_PORT, ports::DEFAULT_HTTP_PORT)?,
            host: var(env_config::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            environment,
            morizo_ai: MorizoAiConfig {
                base_url: trim_base_url(
                    var(env_config::MORIZO_AI_URL)
                        .as_deref()
                        .unwrap_or(defaults::MORIZO_AI_URL),
                ),
            },
            transcription: TranscriptionConfig {
                api_key: var(env_config::OPENAI_API_KEY),
                api_base: trim_base_url(
                    var(env_config::OPENAI_API_BASE)
                        .as_deref()
                        .unwrap_or(defaults::OPENAI_API_BASE),
                ),
                model: var(env_config::WHISPER_MODEL)
                    .unwrap_or_else(|| defaults::WHISPER_MODEL.to_owned()),
                language: var(env_config::WHISPER_LANGUAGE)
                    .unwrap_or_else(|| defaults::WHISPER_LANGUAGE.to_owned()),
            },
            cors: CorsConfig { allowed_origins },
            http_client: HttpClientConfig {
                timeout_secs: parse_or(
                    &var,
                    env_config::HTTP_CLIENT_TIMEOUT_SECS,
                    defaults::HTTP_CLIENT_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_or(
                    &var,
                    env_config::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                )?,
            },
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Morizo Web Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Morizo AI: {}\n\
             - Transcription: {}\n\
             - CORS Origins: {}\n\
             - Upstream Timeout: {}s (connect {}s)",
            self.host,
            self.http_port,
            self.environment,
            self.morizo_ai.base_url,
            if self.transcription.is_enabled() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.cors.allowed_origins,
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
        )
    }
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}"))
    })
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
