// ABOUTME: Core data models for health profiles and supplement recommendations
// ABOUTME: Shared by the validator, prompt builder, mock generator, and HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Data models
//!
//! - `HealthProfile`: validated user intake record, consumed read-only
//! - `LlmRecommendation`: the sole success contract returned to callers

/// Health profile and gender
pub mod profile;
/// Supplement recommendation result
pub mod recommendation;

pub use profile::{Gender, HealthProfile};
pub use recommendation::{LlmRecommendation, Supplement};
