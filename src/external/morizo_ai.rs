// ABOUTME: HTTP client for the Morizo AI backend
// ABOUTME: Relays subscription usage, menu history deletion, and RevenueCat webhooks with the caller's token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use morizo_core::constants::{service_names::MORIZO_AI, upstream};
use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use tracing::{debug, info};

use super::{shared_client, UpstreamError};
use crate::config::MorizoAiConfig;
use crate::middleware::BearerToken;

/// Daily usage counters for the signed-in user
///
/// Missing or `null` fields read as zero/false so a sparse upstream reply is
/// still relayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionUsage {
    /// Upstream success flag
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Day the counters apply to
    #[serde(default)]
    pub date: Option<String>,
    /// Bulk menu generations used
    #[serde(default, deserialize_with = "lenient_count")]
    pub menu_bulk_count: u64,
    /// Step-by-step menu generations used
    #[serde(default, deserialize_with = "lenient_count")]
    pub menu_step_count: u64,
    /// Receipt/fridge OCR scans used
    #[serde(default, deserialize_with = "lenient_count")]
    pub ocr_count: u64,
    /// Subscription plan
    #[serde(default)]
    pub plan_type: Option<String>,
    /// Plan limits, passed through untouched
    #[serde(default)]
    pub limits: Option<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON number for a counter; `null`, negatives and non-finite values read as 0
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(0);
    };

    if let Some(count) = number.as_u64() {
        return Ok(count);
    }

    // Float counters such as `1.0` are whole numbers serialized by Python
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = number
        .as_f64()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map_or(0, |value| value.trunc() as u64);
    Ok(count)
}

/// Client for the Morizo AI backend
#[derive(Debug, Clone)]
pub struct MorizoAiClient {
    client: Client,
    base_url: String,
}

impl MorizoAiClient {
    /// Create a client on the shared connection pool
    #[must_use]
    pub fn new(config: &MorizoAiConfig) -> Self {
        Self::with_client(shared_client().clone(), config)
    }

    /// Create a client with an explicit `reqwest::Client`
    #[must_use]
    pub fn with_client(client: Client, config: &MorizoAiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, UpstreamError> {
        let url = format!("{}{path}", self.base_url);
        Url::parse(&url).map_err(|_| UpstreamError::InvalidUrl {
            service: MORIZO_AI,
            url,
        })
    }

    /// Fetch today's usage counters for the token's owner
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, upstream answers non-2xx, or the
    /// body is not JSON
    pub async fn subscription_usage(
        &self,
        token: &BearerToken,
    ) -> Result<SubscriptionUsage, UpstreamError> {
        let url = self.endpoint(upstream::SUBSCRIPTION_USAGE)?;
        debug!(url = %url, token = %token.masked(), "Requesting subscription usage");

        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(MORIZO_AI, e))?;

        let usage: SubscriptionUsage = read_json(response).await?;
        info!(
            success = usage.success,
            date = usage.date.as_deref().unwrap_or(""),
            plan_type = usage.plan_type.as_deref().unwrap_or(""),
            menu_bulk_count = usage.menu_bulk_count,
            menu_step_count = usage.menu_step_count,
            ocr_count = usage.ocr_count,
            "Received subscription usage"
        );
        Ok(usage)
    }

    /// Delete one menu history entry; the upstream body is returned verbatim
    ///
    /// The id is appended as a single, percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, upstream answers non-2xx, or the
    /// body is not JSON
    pub async fn delete_menu_history(
        &self,
        token: &BearerToken,
        history_id: &str,
    ) -> Result<Value, UpstreamError> {
        let mut url = self.endpoint(upstream::MENU_HISTORY)?;
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidUrl {
                service: MORIZO_AI,
                url: self.base_url.clone(),
            })?
            .push(history_id);
        debug!(url = %url, history_id, "Deleting menu history entry");

        let response = self
            .client
            .delete(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(MORIZO_AI, e))?;

        let body: Value = read_json(response).await?;
        info!(
            history_id,
            success = ?body.get("success"),
            "Menu history entry deleted"
        );
        Ok(body)
    }

    /// Forward a RevenueCat webhook event
    ///
    /// `authorization` is relayed as-is so the backend can verify the
    /// webhook secret; an empty string is sent when the caller had none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, upstream answers non-2xx, or the
    /// body is not JSON
    pub async fn forward_revenuecat_webhook(
        &self,
        authorization: &str,
        event: &Value,
    ) -> Result<Value, UpstreamError> {
        let url = self.endpoint(upstream::REVENUECAT_WEBHOOK)?;
        let event_type = event.get("type").and_then(Value::as_str).unwrap_or("UNKNOWN");
        debug!(
            event_type,
            has_authorization = !authorization.is_empty(),
            "Forwarding RevenueCat webhook"
        );

        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(event)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(MORIZO_AI, e))?;

        let body: Value = read_json(response).await?;
        info!(
            status = ?body.get("status"),
            event_type = ?body.get("event_type"),
            "RevenueCat webhook forwarded"
        );
        Ok(body)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.ok().filter(|text| !text.is_empty());
        return Err(UpstreamError::Status {
            service: MORIZO_AI,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| UpstreamError::from_reqwest(MORIZO_AI, e))
}
