// ABOUTME: Recommendation backend that calls an OpenAI-compatible chat completion API
// ABOUTME: Chooses the output token cap per model and classifies empty or truncated replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use nutrio_core::constants::llm;
use nutrio_core::constants::messages::fetch as msg;
use nutrio_core::models::HealthProfile;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{AttemptFailure, RecommendationBackend};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider, ProviderError};

/// Output token cap for a model
///
/// Reasoning-class models spend part of the budget on hidden reasoning and
/// need a much larger cap to produce any visible content.
#[must_use]
pub fn max_completion_tokens_for(model: &str) -> u32 {
    if llm::REASONING_MODEL_MARKERS
        .iter()
        .any(|marker| model.contains(marker))
    {
        llm::REASONING_MAX_COMPLETION_TOKENS
    } else {
        llm::DEFAULT_MAX_COMPLETION_TOKENS
    }
}

/// Direct chat completion backend
pub struct OpenAiBackend {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl OpenAiBackend {
    /// Wrap a provider, using `model` for every request
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

impl From<ProviderError> for AttemptFailure {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Timeout => Self::Timeout,
            ProviderError::Transport(_) => Self::Network(msg::NETWORK.to_owned()),
            ProviderError::Status { status, message } => Self::Status { status, message },
            ProviderError::InvalidResponse(_) | ProviderError::NoChoices => Self::MissingContent,
        }
    }
}

#[async_trait]
impl RecommendationBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    async fn request(
        &self,
        _profile: &HealthProfile,
        prompt: &str,
    ) -> Result<String, AttemptFailure> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_model(self.model.as_str())
            .with_max_completion_tokens(max_completion_tokens_for(&self.model));

        let response = self.provider.complete(&request).await.map_err(|e| {
            warn!(provider = self.provider.name(), error = %e, "Chat completion failed");
            AttemptFailure::from(e)
        })?;

        if let Some(usage) = response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        if response.content.trim().is_empty() {
            let truncated =
                response.finish_reason.as_deref() == Some(llm::FINISH_REASON_LENGTH);
            warn!(
                model = %response.model,
                finish_reason = ?response.finish_reason,
                "Chat completion returned empty content"
            );
            return Err(if truncated {
                AttemptFailure::Truncated
            } else {
                AttemptFailure::EmptyContent
            });
        }

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_caps() {
        assert_eq!(max_completion_tokens_for("gpt-4o-mini"), 2000);
        assert_eq!(max_completion_tokens_for("gpt-5-nano"), 10_000);
        assert_eq!(max_completion_tokens_for("o1-preview"), 10_000);
        assert_eq!(max_completion_tokens_for("some-reasoning-model"), 10_000);
    }
}
