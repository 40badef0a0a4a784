// ABOUTME: Swappable transports that obtain raw recommendation text for a profile
// ABOUTME: Defines the backend trait and the per-attempt failure type the fetcher retries on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recommendation Backends
//!
//! A backend performs exactly one attempt and returns the raw model text.
//! Extraction, validation, retries, and error mapping are shared by the
//! fetcher, so transports stay interchangeable:
//!
//! - [`OpenAiBackend`]: direct chat completion call
//! - [`ProxyBackend`]: posts the profile to a recommendation service

mod openai;
mod proxy;

pub use openai::{max_completion_tokens_for, OpenAiBackend};
pub use proxy::{ProxyBackend, ProxyEnvelope};

use async_trait::async_trait;
use nutrio_core::constants::messages::fetch as msg;
use nutrio_core::errors::LlmError;
use nutrio_core::models::HealthProfile;

use super::policy::FailureClass;

/// Outcome of a failed attempt, before retry classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    /// Backend returned no usable content
    EmptyContent,
    /// Content empty because output hit the token cap
    Truncated,
    /// Attempt exceeded its time budget
    Timeout,
    /// Non-2xx status from the backend
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },
    /// Envelope lacked the result/content field
    MissingContent,
    /// Typed error relayed unchanged from a recommendation proxy
    Relayed(LlmError),
    /// Transport failure other than timeout, with a user-safe message
    Network(String),
}

impl AttemptFailure {
    /// Policy class of this failure
    #[must_use]
    pub const fn class(&self) -> FailureClass {
        match self {
            Self::EmptyContent => FailureClass::EmptyContent,
            Self::Truncated => FailureClass::Truncated,
            Self::Timeout => FailureClass::Timeout,
            Self::Status { status: 408, .. } => FailureClass::RequestTimeout,
            Self::Status { status: 429, .. } => FailureClass::RateLimited,
            Self::Status { .. } => FailureClass::Status,
            Self::MissingContent => FailureClass::MissingContent,
            Self::Relayed(_) => FailureClass::Relayed,
            Self::Network(_) => FailureClass::Network,
        }
    }

    /// Map the last failure of a fetch into the caller-facing error
    #[must_use]
    pub fn into_llm_error(self) -> LlmError {
        match self {
            Self::EmptyContent => LlmError::parse(msg::EMPTY_CONTENT),
            Self::Truncated => LlmError::parse(msg::TRUNCATED),
            Self::Timeout | Self::Status { status: 408, .. } => LlmError::timeout(msg::TIMEOUT),
            Self::Status {
                status: 429,
                message,
            } => {
                if message.is_empty() {
                    LlmError::api(msg::QUOTA_EXCEEDED)
                } else {
                    LlmError::api(format!("{} {message}", msg::QUOTA_EXCEEDED))
                }
            }
            Self::Status { status, message } => {
                LlmError::api(format!("API 오류 ({status}): {message}"))
            }
            Self::MissingContent => LlmError::api(msg::MISSING_CONTENT),
            Self::Relayed(error) => error,
            Self::Network(message) => LlmError::network(message),
        }
    }
}

/// Transport that performs one recommendation attempt
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Short identifier used in logs and readiness output
    fn name(&self) -> &'static str;

    /// Obtain raw recommendation text for a profile
    ///
    /// `prompt` is the rendered instruction for backends that talk to a
    /// model directly; proxies send the profile instead.
    async fn request(
        &self,
        profile: &HealthProfile,
        prompt: &str,
    ) -> Result<String, AttemptFailure>;
}
