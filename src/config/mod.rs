// ABOUTME: Configuration management for the Morizo web server
// ABOUTME: Environment-only configuration, no config files

//! Configuration module
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file) and are validated once at startup.

/// Environment-based server configuration
pub mod environment;

pub use environment::{
    CorsConfig, Environment, HttpClientConfig, MorizoAiConfig, ServerConfig, TranscriptionConfig,
};
