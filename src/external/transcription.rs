// ABOUTME: Speech-to-text for voice input of pantry and recipe items
// ABOUTME: SpeechTranscriber trait with an OpenAI Whisper implementation and a disabled fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use morizo_core::constants::{service_names::TRANSCRIPTION, upstream};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use super::{shared_client, UpstreamError};
use crate::config::TranscriptionConfig;

/// An uploaded audio clip
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Client-supplied file name
    pub file_name: String,
    /// Declared MIME type
    pub content_type: String,
    /// Raw audio bytes
    pub data: Bytes,
}

impl AudioUpload {
    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the upload carries no audio
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Turns recorded speech into text
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    /// Transcribe one clip
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unavailable or rejects the audio
    async fn transcribe(&self, audio: AudioUpload) -> Result<String, UpstreamError>;
}

/// Build the transcriber for this deployment
///
/// Without an API key every call fails with [`UpstreamError::NotConfigured`].
#[must_use]
pub fn transcriber_from_config(config: &TranscriptionConfig) -> Arc<dyn SpeechTranscriber> {
    match OpenAiTranscriber::new(config) {
        Some(transcriber) => Arc::new(transcriber),
        None => Arc::new(DisabledTranscriber),
    }
}

/// OpenAI audio transcription API client
#[derive(Clone)]
pub struct OpenAiTranscriber {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    language: String,
}

impl OpenAiTranscriber {
    /// Create a transcriber on the shared connection pool, if an API key is configured
    #[must_use]
    pub fn new(config: &TranscriptionConfig) -> Option<Self> {
        Self::with_client(shared_client().clone(), config)
    }

    /// Create a transcriber with an explicit `reqwest::Client`
    #[must_use]
    pub fn with_client(client: Client, config: &TranscriptionConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client,
            api_key,
            endpoint: format!(
                "{}{}",
                config.api_base.trim_end_matches('/'),
                upstream::AUDIO_TRANSCRIPTIONS
            ),
            model: config.model.clone(),
            language: config.language.clone(),
        })
    }
}

impl std::fmt::Debug for OpenAiTranscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTranscriber")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SpeechTranscriber for OpenAiTranscriber {
    async fn transcribe(&self, audio: AudioUpload) -> Result<String, UpstreamError> {
        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            bytes = audio.len(),
            content_type = %audio.content_type,
            "Sending audio for transcription"
        );

        let file = Part::bytes(audio.data.to_vec())
            .file_name(audio.file_name)
            .mime_str(&audio.content_type)
            .map_err(|e| UpstreamError::from_reqwest(TRANSCRIPTION, e))?;

        let form = Form::new()
            .part("file", file)
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "text");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(TRANSCRIPTION, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::from_reqwest(TRANSCRIPTION, e))?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: TRANSCRIPTION,
                status: status.as_u16(),
                body: Some(text).filter(|body| !body.is_empty()),
            });
        }

        // Plain-text responses end with a newline
        Ok(text.trim_end_matches(['\r', '\n']).to_owned())
    }
}

/// Transcriber used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTranscriber;

#[async_trait]
impl SpeechTranscriber for DisabledTranscriber {
    async fn transcribe(&self, _audio: AudioUpload) -> Result<String, UpstreamError> {
        Err(UpstreamError::NotConfigured {
            service: TRANSCRIPTION,
        })
    }
}
