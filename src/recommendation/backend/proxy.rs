// ABOUTME: Recommendation backend that delegates to a remote recommendation service
// ABOUTME: Posts the profile and unwraps either a result envelope or a bare recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use nutrio_core::constants::messages::fetch as msg;
use nutrio_core::constants::{endpoints, timeouts};
use nutrio_core::errors::{AppError, LlmError, LlmErrorKind};
use nutrio_core::models::HealthProfile;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, warn};

use super::{AttemptFailure, RecommendationBackend};

/// Response shape of the recommendation service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProxyEnvelope {
    /// `POST /health/recommend` with `{profile}`; answer `{result, model_id?, region?}`
    /// where `result` is a JSON string or object
    #[default]
    Result,
    /// `POST /api/recommendation` with the bare profile; answer is the recommendation
    Bare,
}

impl ProxyEnvelope {
    /// Configuration value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Result => "result",
            Self::Bare => "bare",
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::Result => endpoints::HEALTH_RECOMMEND,
            Self::Bare => endpoints::API_RECOMMENDATION,
        }
    }
}

impl FromStr for ProxyEnvelope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "result" => Ok(Self::Result),
            "bare" => Ok(Self::Bare),
            other => Err(format!("unknown proxy envelope '{other}'")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResultEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    model_id: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayedError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<String>,
}

/// Backend that forwards the profile to a recommendation service
pub struct ProxyBackend {
    client: Client,
    base_url: String,
    envelope: ProxyEnvelope,
}

impl ProxyBackend {
    /// Create a proxy backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        envelope: ProxyEnvelope,
        request_timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts::CONNECT_TIMEOUT_SECS))
            .timeout(request_timeout)
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to create HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            envelope,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.envelope.path()
        )
    }

    fn body(&self, profile: &HealthProfile) -> Value {
        match self.envelope {
            ProxyEnvelope::Result => json!({ "profile": profile }),
            ProxyEnvelope::Bare => json!(profile),
        }
    }

    /// Classify a non-2xx answer
    fn failure_from_status(status: StatusCode, body: &str) -> AttemptFailure {
        let code = status.as_u16();
        if status != StatusCode::REQUEST_TIMEOUT && status != StatusCode::TOO_MANY_REQUESTS {
            if let Ok(relayed) = serde_json::from_str::<RelayedError>(body) {
                if relayed.kind.is_some() || relayed.message.is_some() {
                    let kind = relayed
                        .kind
                        .as_deref()
                        .and_then(LlmErrorKind::from_wire)
                        .unwrap_or(LlmErrorKind::Api);
                    let message = relayed
                        .message
                        .unwrap_or_else(|| "서버 오류가 발생했습니다.".to_owned());
                    return AttemptFailure::Relayed(LlmError::new(kind, message));
                }
            }
        }
        AttemptFailure::Status {
            status: code,
            message: format!(
                "서버 오류 ({code}): {}",
                status.canonical_reason().unwrap_or("unknown")
            ),
        }
    }

    fn unwrap_envelope(&self, body: String) -> Result<String, AttemptFailure> {
        match self.envelope {
            ProxyEnvelope::Bare => {
                if body.trim().is_empty() {
                    Err(AttemptFailure::EmptyContent)
                } else {
                    Ok(body)
                }
            }
            ProxyEnvelope::Result => {
                let envelope: ResultEnvelope = serde_json::from_str(&body).map_err(|e| {
                    error!(error = %e, body = %body, "Recommendation service returned invalid JSON");
                    AttemptFailure::MissingContent
                })?;
                debug!(
                    model_id = envelope.model_id.as_deref().unwrap_or("unknown"),
                    region = envelope.region.as_deref().unwrap_or("unknown"),
                    "Recommendation service answered"
                );
                match envelope.result {
                    Some(Value::String(text)) if text.trim().is_empty() => {
                        Err(AttemptFailure::EmptyContent)
                    }
                    Some(Value::String(text)) => Ok(text),
                    Some(Value::Null) | None => {
                        error!(body = %body, "Recommendation service response has no result field");
                        Err(AttemptFailure::MissingContent)
                    }
                    Some(other) => Ok(other.to_string()),
                }
            }
        }
    }
}

#[async_trait]
impl RecommendationBackend for ProxyBackend {
    fn name(&self) -> &'static str {
        "proxy"
    }

    async fn request(
        &self,
        profile: &HealthProfile,
        _prompt: &str,
    ) -> Result<String, AttemptFailure> {
        let response = self
            .client
            .post(self.url())
            .json(&self.body(profile))
            .send()
            .await
            .map_err(|e| {
                warn!(base_url = %self.base_url, error = %e, "Recommendation service request failed");
                if e.is_timeout() {
                    AttemptFailure::Timeout
                } else {
                    AttemptFailure::Network(msg::PROXY_UNREACHABLE.to_owned())
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read recommendation service response");
            if e.is_timeout() {
                AttemptFailure::Timeout
            } else {
                AttemptFailure::Network(msg::PROXY_UNREACHABLE.to_owned())
            }
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Recommendation service returned an error");
            return Err(Self::failure_from_status(status, &body));
        }

        self.unwrap_envelope(body)
    }
}
