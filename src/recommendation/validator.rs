// ABOUTME: Health profile validation and normalization for recommendation requests
// ABOUTME: Fail-fast checks that report only the first violated constraint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Profile Validator
//!
//! Turns an untrusted JSON submission into a [`HealthProfile`]. Rules are
//! checked in a fixed priority order and the first violation wins:
//!
//! 1. `age` present, integral, within 1..=150
//! 2. `weight` present, within 1..=500
//! 3. `gender` one of `male`, `female`, `other`
//! 4. `medications` and every concern/lifestyle tag at most 500 characters
//! 5. at least one concern tag and one lifestyle tag
//!
//! Normalization trims medications and tags, drops blank tags, and defaults
//! `smoking` to `false`. A single string is accepted where a tag list is
//! expected and becomes a one-element list.

use nutrio_core::constants::limits;
use nutrio_core::constants::messages::validation as msg;
use nutrio_core::errors::{ProfileField, ValidationError};
use nutrio_core::models::{Gender, HealthProfile};
use serde_json::{Map, Value};

type FieldResult<T> = Result<T, ValidationError>;

/// Validate and normalize a candidate profile
///
/// # Errors
///
/// Returns the first [`ValidationError`] in rule priority order.
pub fn validate_profile(candidate: &Value) -> FieldResult<HealthProfile> {
    let Some(fields) = candidate.as_object() else {
        return Err(ValidationError::new(
            ProfileField::Profile,
            msg::MALFORMED_PROFILE,
        ));
    };

    let age = validate_age(field(fields, "age"))?;
    let weight = validate_weight(field(fields, "weight"))?;
    let gender = validate_gender(field(fields, "gender"))?;
    let medications = validate_medications(field(fields, "medications"))?;
    let concerns = collect_tags(
        field(fields, "concerns"),
        ProfileField::Concerns,
        msg::CONCERNS_NOT_LIST,
        msg::CONCERN_TOO_LONG,
    )?;
    let lifestyle = collect_tags(
        field(fields, "lifestyle"),
        ProfileField::Lifestyle,
        msg::LIFESTYLE_NOT_LIST,
        msg::LIFESTYLE_TOO_LONG,
    )?;
    require_tags(&concerns, ProfileField::Concerns, msg::CONCERNS_EMPTY)?;
    require_tags(&lifestyle, ProfileField::Lifestyle, msg::LIFESTYLE_EMPTY)?;
    let smoking = validate_smoking(field(fields, "smoking"))?;

    Ok(HealthProfile {
        age,
        gender,
        weight,
        smoking,
        medications,
        concerns,
        lifestyle,
    })
}

/// Look up a field, treating JSON `null` as absent
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

fn validate_age(value: Option<&Value>) -> FieldResult<u32> {
    let fail = |reason: &str| ValidationError::new(ProfileField::Age, reason);

    let value = value.ok_or_else(|| fail(msg::AGE_REQUIRED))?;
    let age = value.as_f64().ok_or_else(|| fail(msg::AGE_NOT_NUMBER))?;
    if age.fract() != 0.0 {
        return Err(fail(msg::AGE_NOT_INTEGER));
    }
    if age < limits::AGE_MIN as f64 {
        return Err(fail(msg::AGE_TOO_LOW));
    }
    if age > limits::AGE_MAX as f64 {
        return Err(fail(msg::AGE_TOO_HIGH));
    }
    Ok(age as u32)
}

fn validate_weight(value: Option<&Value>) -> FieldResult<f64> {
    let fail = |reason: &str| ValidationError::new(ProfileField::Weight, reason);

    let value = value.ok_or_else(|| fail(msg::WEIGHT_REQUIRED))?;
    let weight = value
        .as_f64()
        .filter(|w| w.is_finite())
        .ok_or_else(|| fail(msg::WEIGHT_NOT_NUMBER))?;
    if weight < limits::WEIGHT_MIN_KG {
        return Err(fail(msg::WEIGHT_TOO_LOW));
    }
    if weight > limits::WEIGHT_MAX_KG {
        return Err(fail(msg::WEIGHT_TOO_HIGH));
    }
    Ok(weight)
}

fn validate_gender(value: Option<&Value>) -> FieldResult<Gender> {
    let value = value
        .ok_or_else(|| ValidationError::new(ProfileField::Gender, msg::GENDER_REQUIRED))?;
    value
        .as_str()
        .and_then(Gender::from_wire)
        .ok_or_else(|| ValidationError::new(ProfileField::Gender, msg::GENDER_INVALID))
}

fn validate_medications(value: Option<&Value>) -> FieldResult<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let text = value.as_str().ok_or_else(|| {
        ValidationError::new(ProfileField::Medications, msg::MEDICATIONS_NOT_STRING)
    })?;
    let text = text.trim();
    if text.chars().count() > limits::MAX_TEXT_CHARS {
        return Err(ValidationError::new(
            ProfileField::Medications,
            msg::MEDICATIONS_TOO_LONG,
        ));
    }
    Ok(text.to_owned())
}

fn collect_tags(
    value: Option<&Value>,
    field: ProfileField,
    not_list: &str,
    too_long: &str,
) -> FieldResult<Vec<String>> {
    let raw: Vec<&str> = match value {
        None => Vec::new(),
        Some(Value::String(single)) => vec![single.as_str()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| ValidationError::new(field, not_list))
            })
            .collect::<FieldResult<_>>()?,
        Some(_) => return Err(ValidationError::new(field, not_list)),
    };

    let mut tags = Vec::with_capacity(raw.len());
    for tag in raw.into_iter().map(str::trim).filter(|t| !t.is_empty()) {
        if tag.chars().count() > limits::MAX_TEXT_CHARS {
            return Err(ValidationError::new(field, too_long));
        }
        tags.push(tag.to_owned());
    }
    Ok(tags)
}

fn require_tags(tags: &[String], field: ProfileField, reason: &str) -> FieldResult<()> {
    if tags.is_empty() {
        Err(ValidationError::new(field, reason))
    } else {
        Ok(())
    }
}

fn validate_smoking(value: Option<&Value>) -> FieldResult<bool> {
    value.map_or(Ok(false), |v| {
        v.as_bool()
            .ok_or_else(|| ValidationError::new(ProfileField::Smoking, msg::SMOKING_NOT_BOOLEAN))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_float_age_is_accepted() {
        let profile = validate_profile(&json!({
            "age": 29.0, "gender": "male", "weight": 70,
            "concerns": ["피로"], "lifestyle": ["수면"]
        }))
        .unwrap();
        assert_eq!(profile.age, 29);
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let err = validate_profile(&json!({
            "age": null, "gender": "male", "weight": 70,
            "concerns": ["피로"], "lifestyle": ["수면"]
        }))
        .unwrap_err();
        assert_eq!(err.field, ProfileField::Age);
        assert_eq!(err.reason, msg::AGE_REQUIRED);
    }
}
