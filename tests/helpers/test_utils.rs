// ABOUTME: Test utilities for building server resources and routers
// ABOUTME: Configuration from an in-memory variable map plus a scripted transcriber

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use morizo_web::config::ServerConfig;
use morizo_web::external::{AudioUpload, MorizoAiClient, SpeechTranscriber, UpstreamError};
use morizo_web::resources::ServerResources;
use morizo_web::routes::build_router;

/// Build configuration from `(name, value)` pairs, ignoring the process environment
pub fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}

/// Resources pointing the Morizo AI client at `morizo_ai_url`
///
/// Each call gets its own connection pool: pooled connections must not
/// outlive the per-test tokio runtime that opened them.
pub fn resources_for(morizo_ai_url: &str) -> ServerResources {
    let config = config_from(&[("MORIZO_AI_URL", morizo_ai_url), ("ENVIRONMENT", "testing")]);
    let morizo_ai = MorizoAiClient::with_client(reqwest::Client::new(), &config.morizo_ai);

    let mut resources = ServerResources::new(config);
    resources.morizo_ai = morizo_ai;
    resources
}

/// Full application router over the given resources
pub fn router_with(resources: ServerResources) -> Router {
    build_router(Arc::new(resources))
}

/// Transcriber that returns a fixed result and remembers what it was sent
#[derive(Default)]
pub struct ScriptedTranscriber {
    reply: Option<String>,
    received: std::sync::Mutex<Vec<(String, usize)>>,
}

impl ScriptedTranscriber {
    /// Always answer with `text`
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_owned()),
            received: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Always fail as if the service returned 500
    pub fn failing() -> Self {
        Self::default()
    }

    /// `(content_type, size)` of every clip received
    pub fn received(&self) -> Vec<(String, usize)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechTranscriber for ScriptedTranscriber {
    async fn transcribe(&self, audio: AudioUpload) -> Result<String, UpstreamError> {
        self.received
            .lock()
            .unwrap()
            .push((audio.content_type.clone(), audio.len()));
        self.reply.clone().ok_or(UpstreamError::Status {
            service: "OpenAI Whisper",
            status: 500,
            body: None,
        })
    }
}
