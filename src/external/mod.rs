// ABOUTME: Clients for the services this server proxies to
// ABOUTME: Morizo AI (subscription, menu history, webhooks) and speech-to-text transcription
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! # External services
//!
//! The web server owns only the ingredient matcher; everything else is
//! forwarded. [`MorizoAiClient`] relays authenticated calls to the Morizo AI
//! backend and [`SpeechTranscriber`] turns uploaded audio into text.
//! Failures from either side surface as [`UpstreamError`] and become
//! `502`/`503` responses through [`AppError`].

/// Shared connection-pooled HTTP client
pub mod http_client;
/// Morizo AI backend client
pub mod morizo_ai;
/// Speech-to-text transcription
pub mod transcription;

use morizo_core::errors::AppError;
use serde_json::json;

pub use http_client::{initialize_shared_client, shared_client};
pub use morizo_ai::{MorizoAiClient, SubscriptionUsage};
pub use transcription::{
    transcriber_from_config, AudioUpload, DisabledTranscriber, OpenAiTranscriber,
    SpeechTranscriber,
};

/// Failure talking to an upstream service
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status
    #[error("{service} error: {status}")]
    Status {
        /// Service name
        service: &'static str,
        /// HTTP status returned
        status: u16,
        /// Response body, when readable
        body: Option<String>,
    },

    /// Request could not be sent or no response arrived
    #[error("{service} request failed: {source}")]
    Transport {
        /// Service name
        service: &'static str,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Response arrived but could not be decoded
    #[error("{service} returned an unreadable response: {source}")]
    Decode {
        /// Service name
        service: &'static str,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Configured base URL cannot address the requested resource
    #[error("{service} URL is invalid: {url}")]
    InvalidUrl {
        /// Service name
        service: &'static str,
        /// Offending URL
        url: String,
    },

    /// The service is switched off in this deployment
    #[error("{service} is not configured")]
    NotConfigured {
        /// Service name
        service: &'static str,
    },
}

impl UpstreamError {
    /// Classify a client error as a transport or decode failure
    pub(crate) fn from_reqwest(service: &'static str, source: reqwest::Error) -> Self {
        if source.is_decode() {
            Self::Decode { service, source }
        } else {
            Self::Transport { service, source }
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::Status {
                service,
                status,
                ref body,
            } => {
                let details = json!({ "status": status, "body": body });
                Self::external_service(service, format!("upstream returned {status}"))
                    .with_details(details)
                    .with_source(error)
            }
            UpstreamError::Transport { service, ref source }
                if source.is_connect() || source.is_timeout() =>
            {
                let message = source.to_string();
                Self::external_unavailable(service, message).with_source(error)
            }
            UpstreamError::Transport { service, ref source }
            | UpstreamError::Decode { service, ref source } => {
                let message = source.to_string();
                Self::external_service(service, message).with_source(error)
            }
            UpstreamError::InvalidUrl { service, .. } => {
                Self::config(format!("{service} URL is invalid")).with_source(error)
            }
            UpstreamError::NotConfigured { service } => {
                Self::unavailable(format!("{service} is not configured")).with_source(error)
            }
        }
    }
}
