// ABOUTME: Unified error handling with standard error codes and HTTP response formatting
// ABOUTME: Defines AppError for infrastructure failures plus the recommendation error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Two families of errors live here:
//!
//! - `AppError` / `ErrorCode`: infrastructure failures (configuration, HTTP
//!   client construction, server startup) that never reach an end user.
//! - `LlmError` / `LlmErrorKind`: the sanitized `{type, message}` taxonomy
//!   returned to callers of the recommendation pipeline.
//!
//! With the `http-response` feature enabled both convert into axum responses.

/// Recommendation pipeline error taxonomy
pub mod llm;
/// Health profile validation errors
pub mod validation;

pub use llm::{LlmError, LlmErrorKind};
pub use validation::{ProfileField, ValidationError};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for infrastructure failures
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Invalid configuration value for the named variable
    #[must_use]
    pub fn config_invalid(variable: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid value for {variable}: '{value}'"),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error body of an `ErrorResponse`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse, LlmError};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorResponse::from(self))).into_response()
        }
    }

    impl IntoResponse for LlmError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.kind.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(self)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::config_invalid("LLM_TIMEOUT_SECS", "abc");
        let json = serde_json::to_string(&ErrorResponse::from(error)).unwrap();
        assert!(json.contains("CONFIG_INVALID"));
        assert!(json.contains("LLM_TIMEOUT_SECS"));
    }

    #[test]
    fn test_source_chaining() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::internal("client setup failed").with_source(parse_err);
        assert_eq!(error.code, ErrorCode::InternalError);
        assert!(StdError::source(&error).is_some());
    }
}
