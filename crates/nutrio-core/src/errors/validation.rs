// ABOUTME: Validation error for health profile submissions
// ABOUTME: Names the first offending field and the reason it was rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Health profile field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    /// The whole submission (wrong shape or JSON type)
    Profile,
    /// Age in years
    Age,
    /// Weight in kilograms
    Weight,
    /// Gender
    Gender,
    /// Medications free text
    Medications,
    /// Health concern tags
    Concerns,
    /// Lifestyle tags
    Lifestyle,
    /// Smoking flag
    Smoking,
}

impl ProfileField {
    /// Field name as it appears in the request body
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Gender => "gender",
            Self::Medications => "medications",
            Self::Concerns => "concerns",
            Self::Lifestyle => "lifestyle",
            Self::Smoking => "smoking",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First constraint violation detected in a profile submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Offending field
    pub field: ProfileField,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for a field
    #[must_use]
    pub fn new(field: ProfileField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
