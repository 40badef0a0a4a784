// ABOUTME: Best-effort recovery of a JSON object from free-form model output
// ABOUTME: Strips code fences and surrounding prose without repairing the JSON itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use regex::Regex;
use std::sync::OnceLock;

static LEADING_FENCE: OnceLock<Option<Regex>> = OnceLock::new();
static TRAILING_FENCE: OnceLock<Option<Regex>> = OnceLock::new();

fn leading_fence() -> Option<&'static Regex> {
    LEADING_FENCE
        .get_or_init(|| Regex::new(r"(?i)^```(?:json)?\s*").ok())
        .as_ref()
}

fn trailing_fence() -> Option<&'static Regex> {
    TRAILING_FENCE
        .get_or_init(|| Regex::new(r"\s*```$").ok())
        .as_ref()
}

/// Extract the JSON object span from a raw model completion
///
/// Trims the input, removes a leading fence (optionally tagged `json`) and a
/// trailing fence, then returns everything from the first `{` to the last
/// `}`. Without such a span the cleaned text is returned unchanged so that
/// JSON parsing fails downstream.
#[must_use]
pub fn extract_json(raw: &str) -> String {
    let mut cleaned = raw.trim().to_owned();
    if let Some(re) = leading_fence() {
        cleaned = re.replace(&cleaned, "").into_owned();
    }
    if let Some(re) = trailing_fence() {
        cleaned = re.replace(&cleaned, "").into_owned();
    }

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => cleaned[start..=end].to_owned(),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_without_language_tag() {
        assert_eq!(extract_json("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_uppercase_tag() {
        assert_eq!(extract_json("```JSON\n{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_closing_brace_before_opening() {
        assert_eq!(extract_json("} nothing {"), "} nothing {");
    }
}
