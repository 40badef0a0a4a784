// ABOUTME: Health profile to supplement recommendation pipeline
// ABOUTME: Validation, prompt rendering, backend fetch with retries, and response validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recommendation Pipeline
//!
//! ```text
//! raw JSON ──validate_profile──▶ HealthProfile ──build_prompt──▶ prompt
//!     ──RecommendationFetcher──▶ raw text ──parse_recommendation──▶ LlmRecommendation
//! ```
//!
//! In mock mode the fetcher skips the prompt and backend entirely and
//! returns [`generate_mock`] output.

/// Swappable live transports
pub mod backend;
/// JSON extraction from free-form model output
pub mod extractor;
/// Retry orchestration around a backend
pub mod fetcher;
/// Rule-based mock recommendations
pub mod mock;
/// Response validation with safe-mode fallback
pub mod parser;
/// Retry policy table
pub mod policy;
/// Prompt rendering
pub mod prompt;
/// Profile validation and normalization
pub mod validator;

pub use backend::{
    AttemptFailure, OpenAiBackend, ProxyBackend, ProxyEnvelope, RecommendationBackend,
};
pub use extractor::extract_json;
pub use fetcher::{FetchStrategy, RecommendationFetcher};
pub use mock::{generate_mock, MockVariant};
pub use parser::{fallback_recommendation, is_fallback, parse_recommendation, ParseFailure};
pub use policy::{FailureClass, RetryPolicy, RetryRule};
pub use prompt::{build_prompt, PROMPT_VERSION, RESPONSE_SHAPE};
pub use validator::validate_profile;
