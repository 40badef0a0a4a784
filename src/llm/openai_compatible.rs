// ABOUTME: OpenAI-compatible chat completion provider
// ABOUTME: Works against api.openai.com or any endpoint speaking the same protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # `OpenAI`-Compatible Provider
//!
//! Minimal client for the `/chat/completions` endpoint. Requests carry
//! `max_completion_tokens` so reasoning-class models accept them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutrio_server::llm::{ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OpenAiCompatibleConfig::openai("sk-...", "gpt-4o-mini");
//! let provider = OpenAiCompatibleProvider::new(config)?;
//! let response = provider
//!     .complete(&ChatRequest::new(vec![ChatMessage::user("안녕하세요")]))
//!     .await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use nutrio_core::constants::{llm, timeouts};
use nutrio_core::errors::AppError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, ProviderError, TokenUsage};

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// Bearer credential (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl OpenAiCompatibleConfig {
    /// Configuration for the hosted `OpenAI` API
    #[must_use]
    pub fn openai(api_key: &str, model: &str) -> Self {
        Self {
            api_key: Some(api_key.to_owned()),
            default_model: model.to_owned(),
            ..Self::default()
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the whole-request timeout
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: llm::DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: llm::DEFAULT_MODEL.to_owned(),
            connect_timeout: Duration::from_secs(timeouts::CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(timeouts::LLM_ATTEMPT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to create HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self { client, config })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    /// Parse error response from API
    fn parse_error_response(status: StatusCode, body: &str) -> ProviderError {
        let message = serde_json::from_str::<OpenAiErrorResponse>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |error_response| {
                let error_type = error_response
                    .error
                    .error_type
                    .unwrap_or_else(|| "unknown".to_owned());
                debug!(error_type = %error_type, "Parsed API error body");
                if status == StatusCode::TOO_MANY_REQUESTS {
                    Self::extract_rate_limit_message(&error_response.error.message)
                } else {
                    error_response.error.message
                }
            },
        );

        ProviderError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Extract a retry hint from a rate limit error message
    ///
    /// `OpenAI` rate limit errors may include "try again in 20s".
    fn extract_rate_limit_message(message: &str) -> String {
        let lowered = message.to_lowercase();
        if let Some(retry_pos) = lowered.find("try again in ") {
            let after_prefix = &lowered[retry_pos + 13..];
            if let Some(end_pos) = after_prefix.find(|c: char| !c.is_ascii_digit() && c != '.') {
                let time_str = &after_prefix[..end_pos];
                if let Ok(seconds) = time_str.parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!("{seconds_int}초 후 다시 시도해주세요.");
                }
            }
        }
        String::new()
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            max_completion_tokens: request.max_completion_tokens,
        };
        debug!(
            messages = openai_request.messages.len(),
            max_completion_tokens = ?openai_request.max_completion_tokens,
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self.add_auth_header(http_request).send().await.map_err(|e| {
            error!(base_url = %self.config.base_url, "Failed to send request: {e}");
            ProviderError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {e}");
            ProviderError::from(e)
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Chat completion request failed");
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse API response: {e} - body: {}",
                body.chars().take(500).collect::<String>()
            );
            ProviderError::InvalidResponse(e.to_string())
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::NoChoices)?;

        let content = choice.message.content.unwrap_or_default();
        debug!(
            content_len = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model.unwrap_or_else(|| model.to_owned()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_hint() {
        let hint = OpenAiCompatibleProvider::extract_rate_limit_message(
            "Rate limit reached for gpt-4o-mini. Please try again in 19.5s.",
        );
        assert_eq!(hint, "20초 후 다시 시도해주세요.");
        assert!(OpenAiCompatibleProvider::extract_rate_limit_message("quota").is_empty());
    }

    #[test]
    fn test_error_body_message() {
        let err = OpenAiCompatibleProvider::parse_error_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"bad model","type":"invalid_request_error"}}"#,
        );
        assert!(matches!(
            err,
            ProviderError::Status { status: 400, ref message } if message == "bad model"
        ));
    }

    #[test]
    fn test_non_json_error_body() {
        let err =
            OpenAiCompatibleProvider::parse_error_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(
            err,
            ProviderError::Status { status: 502, ref message } if message == "upstream down"
        ));
    }
}
