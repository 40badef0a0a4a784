// ABOUTME: Typed error taxonomy surfaced by the recommendation pipeline
// ABOUTME: Serializes as {type, message} and maps each kind to an HTTP status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::validation::ValidationError;

/// Failure category of a recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmErrorKind {
    /// Transport failure reaching the backend
    Network,
    /// Time budget exceeded after retries
    Timeout,
    /// Model output unusable in a context without a fallback
    Parse,
    /// Non-2xx, rate limited, or malformed envelope from the backend
    Api,
    /// Malformed or incomplete input profile
    Validation,
}

impl LlmErrorKind {
    /// Wire name of this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Parse => "parse",
            Self::Api => "api",
            Self::Validation => "validation",
        }
    }

    /// HTTP status used when this kind is returned by the service
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Parse => 500,
            Self::Api => 502,
            Self::Network => 503,
            Self::Timeout => 504,
        }
    }

    /// Parse a wire name, as found in `{type, message}` bodies from a proxy
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "network" => Some(Self::Network),
            "timeout" => Some(Self::Timeout),
            "parse" => Some(Self::Parse),
            "api" => Some(Self::Api),
            "validation" => Some(Self::Validation),
            _ => None,
        }
    }
}

impl fmt::Display for LlmErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sanitized error returned to callers of the recommendation pipeline
///
/// Every failure path of a fetch yields exactly one of these. Diagnostic
/// detail (raw bodies, transport errors) is logged, never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} error: {message}")]
pub struct LlmError {
    /// Failure category
    #[serde(rename = "type")]
    pub kind: LlmErrorKind,
    /// Human-readable message safe to show to end users
    pub message: String,
}

impl LlmError {
    /// Create an error of the given kind
    #[must_use]
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Transport failure
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    /// Time budget exceeded
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Timeout, message)
    }

    /// Unusable model output
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Parse, message)
    }

    /// Backend rejected or malformed the response
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Api, message)
    }

    /// Invalid input profile
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Validation, message)
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.kind.http_status()
    }
}

impl From<ValidationError> for LlmError {
    fn from(error: ValidationError) -> Self {
        Self::validation(error.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::validation::ProfileField;

    #[test]
    fn test_serializes_as_type_and_message() {
        let error = LlmError::timeout("too slow");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["type"], "timeout");
        assert_eq!(json["message"], "too slow");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(LlmErrorKind::Validation.http_status(), 400);
        assert_eq!(LlmErrorKind::Timeout.http_status(), 504);
        assert_eq!(LlmErrorKind::Api.http_status(), 502);
        assert_eq!(LlmErrorKind::Network.http_status(), 503);
        assert_eq!(LlmErrorKind::Parse.http_status(), 500);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for kind in [
            LlmErrorKind::Network,
            LlmErrorKind::Timeout,
            LlmErrorKind::Parse,
            LlmErrorKind::Api,
            LlmErrorKind::Validation,
        ] {
            assert_eq!(LlmErrorKind::from_wire(kind.as_str()), Some(kind));
        }
        assert_eq!(LlmErrorKind::from_wire("unknown"), None);
    }

    #[test]
    fn test_from_validation_error() {
        let error: LlmError = ValidationError::new(ProfileField::Age, "나이는 150 이하여야 합니다").into();
        assert_eq!(error.kind, LlmErrorKind::Validation);
        assert_eq!(error.message, "나이는 150 이하여야 합니다");
    }
}
