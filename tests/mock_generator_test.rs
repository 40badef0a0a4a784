// ABOUTME: Integration tests for the rule-based mock recommendation generator
// ABOUTME: Checks fatigue/sleep rules, variants, and the medication warning in the summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::{fatigue_profile, profile, warfarin_profile};
use nutrio_server::models::Gender;
use nutrio_server::recommendation::{generate_mock, MockVariant};

#[test]
fn test_fatigue_profile_gets_melatonin() {
    let rec = generate_mock(&fatigue_profile(), MockVariant::Rich);

    assert!(rec.supplements.iter().any(|s| s.name == "멜라토닌"));
    assert!(rec.supplements.iter().any(|s| s.name == "비타민 D3"));
    assert!(rec.summary.contains("29세"));
    assert!(rec.summary.contains("남성"));
    assert!(!rec.summary.contains("⚠️"));
}

#[test]
fn test_basic_variant_has_melatonin_only() {
    let rec = generate_mock(&fatigue_profile(), MockVariant::Basic);

    assert_eq!(rec.supplements.len(), 1);
    assert_eq!(rec.supplements[0].name, "멜라토닌");
    assert!(rec.supplements[0].caution.is_some());
}

#[test]
fn test_medications_add_interaction_warning() {
    let rec = generate_mock(&warfarin_profile(), MockVariant::Rich);

    assert!(rec.summary.contains("65세"));
    assert!(rec.summary.contains("여성"));
    assert!(rec.summary.contains("와파린"));
    assert!(rec.summary.contains("약물 상호작용"));
}

#[test]
fn test_other_profiles_get_multivitamin() {
    let rec = generate_mock(&warfarin_profile(), MockVariant::Rich);

    assert_eq!(rec.supplements.len(), 1);
    assert_eq!(rec.supplements[0].name, "종합 비타민");
}

#[test]
fn test_lifestyle_tag_alone_triggers_melatonin() {
    let p = profile(35, Gender::Other, &["관절"], &["피로"]);
    let rec = generate_mock(&p, MockVariant::Basic);
    assert_eq!(rec.supplements[0].name, "멜라토닌");
    assert!(rec.summary.contains("기타"));
}

#[test]
fn test_tag_matching_is_exact() {
    let p = profile(35, Gender::Male, &["만성 피로"], &["수면 부족"]);
    let rec = generate_mock(&p, MockVariant::Rich);
    assert_eq!(rec.supplements[0].name, "종합 비타민");
}

#[test]
fn test_none_sentinel_is_not_a_medication() {
    let mut p = fatigue_profile();
    p.medications = " 없음 ".to_owned();
    assert!(!generate_mock(&p, MockVariant::Rich).summary.contains("⚠️"));
}

#[test]
fn test_mock_is_idempotent() {
    let p = warfarin_profile();
    for variant in [MockVariant::Basic, MockVariant::Rich] {
        assert_eq!(generate_mock(&p, variant), generate_mock(&p, variant));
    }
}
