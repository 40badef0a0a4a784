// ABOUTME: Parses model output into a validated recommendation with safe-mode fallback
// ABOUTME: Never fails outward; malformed output degrades to the canonical fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Response Validator
//!
//! Model-output malformation is absorbed here: callers always receive a
//! well-formed [`LlmRecommendation`]. The underlying failure and the raw
//! response are logged for operators.

use nutrio_core::constants::messages::fallback;
use nutrio_core::models::{LlmRecommendation, Supplement};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::{error, warn};

use super::extractor::extract_json;

/// Reason model output was rejected
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Nothing left after extraction
    #[error("response contains no JSON")]
    Empty,
    /// Extracted text is not valid JSON of the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON parsed but violates the recommendation schema
    #[error("schema violation: {0}")]
    Schema(String),
    /// Schema passed with an empty supplement list
    #[error("recommendation has no supplements")]
    NoSupplements,
}

#[derive(Debug, Deserialize)]
struct RawSupplement {
    name: String,
    reason: String,
    dosage: String,
    #[serde(default, deserialize_with = "present_string")]
    caution: Option<String>,
}

/// Optional field that must be a string when present; `null` is rejected
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct RawRecommendation {
    supplements: Vec<RawSupplement>,
    summary: String,
}

/// Canonical safe-mode recommendation
#[must_use]
pub fn fallback_recommendation() -> LlmRecommendation {
    LlmRecommendation {
        supplements: vec![Supplement {
            name: fallback::SUPPLEMENT_NAME.to_owned(),
            reason: fallback::REASON.to_owned(),
            dosage: fallback::DOSAGE.to_owned(),
            caution: Some(fallback::CAUTION.to_owned()),
        }],
        summary: fallback::SUMMARY.to_owned(),
    }
}

/// Whether a recommendation is the safe-mode fallback
#[must_use]
pub fn is_fallback(recommendation: &LlmRecommendation) -> bool {
    recommendation.summary.contains(fallback::SAFE_MODE_MARKER)
}

/// Parse raw model output into a recommendation
///
/// Any extraction, JSON, or schema failure yields [`fallback_recommendation`].
#[must_use]
pub fn parse_recommendation(raw: &str) -> LlmRecommendation {
    match try_parse_recommendation(raw) {
        Ok(recommendation) => recommendation,
        Err(failure) => {
            error!(
                error = %failure,
                raw_response = %raw,
                "Model output rejected, returning safe-mode recommendation"
            );
            fallback_recommendation()
        }
    }
}

/// Parse raw model output, reporting why it was rejected
///
/// # Errors
///
/// Returns a [`ParseFailure`] describing the first problem found.
pub fn try_parse_recommendation(raw: &str) -> Result<LlmRecommendation, ParseFailure> {
    let json = extract_json(raw);
    if json.trim().is_empty() {
        return Err(ParseFailure::Empty);
    }

    let parsed: RawRecommendation = serde_json::from_str(&json)?;
    validate_schema(&parsed)?;

    // Duplicates the schema's minimum length; kept in case the schema is relaxed.
    if parsed.supplements.is_empty() {
        warn!("Supplement list empty after schema validation");
        return Err(ParseFailure::NoSupplements);
    }

    Ok(LlmRecommendation {
        supplements: parsed
            .supplements
            .into_iter()
            .map(|s| Supplement {
                name: s.name,
                reason: s.reason,
                dosage: s.dosage,
                caution: s.caution,
            })
            .collect(),
        summary: parsed.summary,
    })
}

fn validate_schema(parsed: &RawRecommendation) -> Result<(), ParseFailure> {
    if parsed.supplements.is_empty() {
        return Err(ParseFailure::Schema(
            "supplements must contain at least 1 item".to_owned(),
        ));
    }
    for (index, supplement) in parsed.supplements.iter().enumerate() {
        for (field, value) in [
            ("name", &supplement.name),
            ("reason", &supplement.reason),
            ("dosage", &supplement.dosage),
        ] {
            if value.is_empty() {
                return Err(ParseFailure::Schema(format!(
                    "supplements[{index}].{field} must not be empty"
                )));
            }
        }
    }
    if parsed.summary.is_empty() {
        return Err(ParseFailure::Schema("summary must not be empty".to_owned()));
    }
    Ok(())
}
