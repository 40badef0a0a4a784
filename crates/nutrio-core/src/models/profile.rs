// ABOUTME: Validated health profile submitted by a user
// ABOUTME: Holds demographics, medications, and concern/lifestyle tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::sentinels;

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Parse the wire value (`male`, `female`, `other`)
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Korean label rendered into prompts and summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "남성",
            Self::Female => "여성",
            Self::Other => "기타",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized health profile
///
/// Produced by profile validation; the pipeline only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in years, 1 to 150
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Weight in kilograms, 1 to 500
    pub weight: f64,
    /// Current smoker
    #[serde(default)]
    pub smoking: bool,
    /// Medications currently taken; empty means none
    #[serde(default)]
    pub medications: String,
    /// Health concern tags in submission order
    #[serde(default)]
    pub concerns: Vec<String>,
    /// Lifestyle tags in submission order
    #[serde(default)]
    pub lifestyle: Vec<String>,
}

impl HealthProfile {
    /// Whether the user listed any medication
    ///
    /// Empty text and the `없음` sentinel both count as none.
    #[must_use]
    pub fn has_medications(&self) -> bool {
        let medications = self.medications.trim();
        !medications.is_empty() && medications != sentinels::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(medications: &str) -> HealthProfile {
        HealthProfile {
            age: 29,
            gender: Gender::Male,
            weight: 70.0,
            smoking: false,
            medications: medications.to_owned(),
            concerns: vec!["피로".to_owned()],
            lifestyle: vec!["수면".to_owned()],
        }
    }

    #[test]
    fn test_has_medications() {
        assert!(!profile("").has_medications());
        assert!(!profile("  ").has_medications());
        assert!(!profile("없음").has_medications());
        assert!(profile("와파린").has_medications());
    }

    #[test]
    fn test_gender_wire_and_label() {
        assert_eq!(Gender::from_wire("female"), Some(Gender::Female));
        assert_eq!(Gender::from_wire("Female"), None);
        assert_eq!(Gender::Other.label(), "기타");
        assert_eq!(Gender::Male.to_string(), "male");
    }
}
