// ABOUTME: Voice input route transcribing recorded audio to Japanese text
// ABOUTME: Validates the multipart upload (presence, size, MIME type) before calling the transcriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! Voice transcription route
//!
//! `POST /api/whisper` takes a multipart form with an `audio` file field and
//! answers `{"text": ..., "success": true}`.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use morizo_core::constants::{audio, limits, routes};
use morizo_core::errors::{AppError, AppResult, ErrorCode};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use super::log_outcome;
use crate::external::AudioUpload;
use crate::logging::AppLogger;
use crate::middleware::request_id;
use crate::resources::ServerResources;

/// Successful transcription response
#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    /// Recognized text
    pub text: String,
    /// Always `true`
    pub success: bool,
}

/// Voice routes
pub struct VoiceRoutes;

impl VoiceRoutes {
    /// Create all voice routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::WHISPER,
                post(Self::handle_transcribe)
                    .layer(DefaultBodyLimit::max(limits::MAX_AUDIO_REQUEST_BYTES)),
            )
            .with_state(resources)
    }

    /// Handle `POST /api/whisper`
    async fn handle_transcribe(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let request_id = request_id(&headers).unwrap_or_default();
        info!(
            request_id = %request_id,
            content_type = headers
                .get(axum::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(""),
            "Transcription requested"
        );

        let result = Self::transcribe(&resources, &request_id, multipart).await;
        if let Err(error) = &result {
            AppLogger::log_voice_event("transcription_error", &request_id, Some(&error.message));
        }
        log_outcome("POST", routes::WHISPER, started, Some(request_id), result)
    }

    async fn transcribe(
        resources: &ServerResources,
        request_id: &str,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Response> {
        let mut multipart = multipart
            .map_err(|rejection| AppError::new(ErrorCode::InvalidFormat, rejection.body_text()))?;

        let upload = read_audio_field(&mut multipart)
            .await?
            .ok_or_else(|| AppError::missing_field(audio::FORM_FIELD))?;
        validate_upload(&upload)?;

        AppLogger::log_voice_event(
            "start_recording",
            request_id,
            Some(&format!("{} bytes, {}", upload.len(), upload.content_type)),
        );

        let transcribe_started = Instant::now();
        let text = resources.transcriber.transcribe(upload).await?;

        let preview: String = text.chars().take(limits::TRANSCRIPTION_PREVIEW_CHARS).collect();
        info!(
            request_id = %request_id,
            transcription_chars = text.chars().count(),
            duration_ms = u64::try_from(transcribe_started.elapsed().as_millis()).unwrap_or(u64::MAX),
            preview = %preview,
            "Transcription received"
        );
        AppLogger::log_voice_event("transcription_success", request_id, None);

        let response = TranscriptionResponse {
            text,
            success: true,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

/// Find the audio file field, skipping any others
async fn read_audio_field(multipart: &mut Multipart) -> AppResult<Option<AudioUpload>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(audio::FORM_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("audio").to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let data = field.bytes().await.map_err(multipart_error)?;

        return Ok(Some(AudioUpload {
            file_name,
            content_type,
            data,
        }));
    }

    Ok(None)
}

/// Enforce the size limit and the accepted audio formats
fn validate_upload(upload: &AudioUpload) -> AppResult<()> {
    if upload.len() > limits::MAX_AUDIO_BYTES {
        warn!(
            file_size = upload.len(),
            max_size = limits::MAX_AUDIO_BYTES,
            "Audio upload too large"
        );
        return Err(too_large());
    }

    if !is_allowed_mime_type(&upload.content_type) {
        warn!(file_type = %upload.content_type, "Audio format not accepted");
        return Err(AppError::invalid_input(format!(
            "Unsupported audio format: {}. Accepted formats: MP3, WAV, WebM, OGG, M4A",
            upload.content_type
        ))
        .with_details(json!({ "allowed": audio::ALLOWED_MIME_TYPES })));
    }

    Ok(())
}

/// Compare on the media type only, ignoring parameters such as `codecs=opus`
fn is_allowed_mime_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    audio::ALLOWED_MIME_TYPES.contains(&essence.as_str())
}

fn too_large() -> AppError {
    AppError::out_of_range("Audio file exceeds the 10MB limit").with_details(json!({
        "max_bytes": limits::MAX_AUDIO_BYTES
    }))
}

fn multipart_error(error: MultipartError) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        AppError::new(ErrorCode::InvalidFormat, error.body_text())
    }
}
