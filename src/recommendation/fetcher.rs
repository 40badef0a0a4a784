// ABOUTME: Fetches a recommendation for a validated profile with bounded retries
// ABOUTME: Applies per-attempt timeouts, policy-driven backoff, and mock short-circuiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recommendation Fetcher
//!
//! One call to [`RecommendationFetcher::fetch`] makes at most
//! `max_retries + 1` backend attempts. Each attempt is bounded by the
//! configured timeout. Between attempts the fetcher sleeps for the delay the
//! [`RetryPolicy`] assigns to the failure class. A successful attempt is run
//! through [`parse_recommendation`], so malformed model output becomes the
//! safe-mode fallback rather than an error.

use nutrio_core::constants::timeouts;
use nutrio_core::errors::{AppResult, LlmError};
use nutrio_core::models::{HealthProfile, LlmRecommendation};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use super::backend::{AttemptFailure, OpenAiBackend, ProxyBackend, RecommendationBackend};
use super::mock::{generate_mock, MockVariant};
use super::parser::parse_recommendation;
use super::policy::RetryPolicy;
use super::prompt::{build_prompt, PROMPT_VERSION};
use crate::config::{LlmConfig, MockReason, RecommendationMode};
use crate::llm::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};

/// Where recommendations come from
#[derive(Clone)]
pub enum FetchStrategy {
    /// Rule-based output, no network
    Mock(MockVariant),
    /// A live backend
    Live(Arc<dyn RecommendationBackend>),
}

impl FetchStrategy {
    /// Short label for logs and readiness output
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mock(_) => "mock",
            Self::Live(backend) => backend.name(),
        }
    }
}

/// Retrying recommendation fetcher
#[derive(Clone)]
pub struct RecommendationFetcher {
    strategy: FetchStrategy,
    policy: RetryPolicy,
    attempt_timeout: Duration,
}

impl RecommendationFetcher {
    /// Create a fetcher with an explicit strategy
    #[must_use]
    pub const fn new(strategy: FetchStrategy, policy: RetryPolicy, attempt_timeout: Duration) -> Self {
        Self {
            strategy,
            policy,
            attempt_timeout,
        }
    }

    /// Mock-only fetcher with default policy
    #[must_use]
    pub fn mock(variant: MockVariant) -> Self {
        Self::new(
            FetchStrategy::Mock(variant),
            RetryPolicy::default(),
            Duration::from_secs(timeouts::LLM_ATTEMPT_TIMEOUT_SECS),
        )
    }

    /// Resolve the mode once and build the matching backend
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client for a live backend cannot be created.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        let strategy = match config.resolve_mode() {
            RecommendationMode::Mock { variant, reason } => {
                match reason {
                    MockReason::Forced => info!(variant = variant.as_str(), "Mock mode enabled"),
                    MockReason::MissingCredentials => warn!(
                        backend = config.backend.as_str(),
                        variant = variant.as_str(),
                        "Live backend not configured; falling back to mock mode"
                    ),
                }
                FetchStrategy::Mock(variant)
            }
            RecommendationMode::OpenAi {
                api_key,
                model,
                base_url,
            } => {
                let provider_config = OpenAiCompatibleConfig::openai(&api_key, &model)
                    .with_base_url(base_url)
                    .with_request_timeout(config.attempt_timeout);
                let provider = OpenAiCompatibleProvider::new(provider_config)?;
                info!(model = %model, base_url = provider.base_url(), "Using OpenAI backend");
                FetchStrategy::Live(Arc::new(OpenAiBackend::new(Arc::new(provider), model)))
            }
            RecommendationMode::Proxy { base_url, envelope } => {
                info!(base_url = %base_url, envelope = envelope.as_str(), "Using recommendation proxy");
                FetchStrategy::Live(Arc::new(ProxyBackend::new(
                    base_url,
                    envelope,
                    config.attempt_timeout,
                )?))
            }
        };

        Ok(Self::new(strategy, config.retry, config.attempt_timeout))
    }

    /// Label of the active strategy
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.strategy.label()
    }

    /// Whether the fetcher serves mock output
    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self.strategy, FetchStrategy::Mock(_))
    }

    /// Retry policy in effect
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetch a recommendation for a validated profile
    ///
    /// # Errors
    ///
    /// Returns the mapped [`LlmError`] of the last attempt once the failure
    /// is terminal or the attempt budget is spent.
    #[instrument(skip_all, fields(mode = self.mode_label()))]
    pub async fn fetch(&self, profile: &HealthProfile) -> Result<LlmRecommendation, LlmError> {
        let backend = match &self.strategy {
            FetchStrategy::Mock(variant) => {
                debug!(variant = variant.as_str(), "Serving mock recommendation");
                return Ok(generate_mock(profile, *variant));
            }
            FetchStrategy::Live(backend) => backend,
        };

        let prompt = build_prompt(profile);
        let max_attempts = self.policy.max_attempts();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!(
                backend = backend.name(),
                attempt,
                max_attempts,
                prompt_version = PROMPT_VERSION,
                "Requesting recommendation"
            );

            let failure = match timeout(self.attempt_timeout, backend.request(profile, &prompt)).await
            {
                Ok(Ok(raw)) => {
                    debug!(attempt, response_len = raw.len(), "Backend answered");
                    return Ok(parse_recommendation(&raw));
                }
                Ok(Err(failure)) => failure,
                Err(_) => AttemptFailure::Timeout,
            };

            let class = failure.class();
            if let Some(delay) = self.policy.next_delay(class, attempt) {
                warn!(
                    backend = backend.name(),
                    failure = %class,
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "Recommendation attempt failed; retrying"
                );
                sleep(delay).await;
                continue;
            }

            let err = failure.into_llm_error();
            error!(
                backend = backend.name(),
                failure = %class,
                attempt,
                error = %err,
                "Recommendation fetch failed"
            );
            return Err(err);
        }
    }

    /// Fetch unless `cancel` fires first
    ///
    /// Returns `None` when cancelled; no further attempts are made.
    pub async fn fetch_cancellable(
        &self,
        profile: &HealthProfile,
        cancel: &CancellationToken,
    ) -> Option<Result<LlmRecommendation, LlmError>> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Recommendation fetch cancelled");
                None
            }
            result = self.fetch(profile) => Some(result),
        }
    }
}
