// ABOUTME: Supplement recommendation result returned by the pipeline
// ABOUTME: A summary plus a non-empty ordered list of supplements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// One suggested supplement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    /// Supplement name (Korean)
    pub name: String,
    /// Why it is suggested for this profile
    pub reason: String,
    /// Daily dosage
    pub dosage: String,
    /// Warnings, including medication interactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
}

/// Recommendation returned to callers
///
/// Always carries at least one supplement once it leaves the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmRecommendation {
    /// Suggested supplements in model order
    pub supplements: Vec<Supplement>,
    /// Overall summary, including interaction warnings
    pub summary: String,
}
