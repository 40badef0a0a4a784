// ABOUTME: Prompt construction for supplement recommendation requests
// ABOUTME: Renders a validated health profile into a fixed Korean instruction template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Prompt Builder
//!
//! The template is a versioned contract with the model: any wording change
//! alters observed model behavior, so it must come with a bump of
//! [`PROMPT_VERSION`].

use nutrio_core::constants::sentinels;
use nutrio_core::models::HealthProfile;

/// Version of the instruction template
pub const PROMPT_VERSION: &str = "2025-01.interaction-check.v2";

/// JSON shape the model is required to answer with
pub const RESPONSE_SHAPE: &str = r#"{
  "supplements": [{"name": "한국어명", "reason": "이유(약물+생활+고민 종합 고려)", "dosage": "1일 기준 섭취 용량 (예: 400 IU, 300 mg)", "caution": "주의사항(약물 상호작용 포함)"}],
  "summary": "요약(약물 상호작용 경고 포함)"
}"#;

const INSTRUCTIONS: &str = "다음 두 가지를 수행하세요:

1. 약물 상호작용 체크:
   - 복용 중인 약물과 추천할 영양제 간의 상호작용을 분석하세요
   - 위험한 조합이 있으면 caution 필드에 명시하세요
   - 복용 중인 약물과 함께 섭취하면 안 되는 영양제가 있으면 해당 영양제를 추천하지 마세요
   - 예: 항응고제(와파린 등) 복용 시 비타민 K, 은행잎 추출물 등은 피해야 함

2. 종합 추천:
   - 복용 중인 약물 + 생활 패턴 + 건강 고민을 모두 종합하여 추천하세요
   - 각 영양제의 reason 필드에 다음을 포함하세요:
     * 어떤 건강 고민을 해결하기 위한 것인지
     * 어떤 생활 패턴을 고려한 것인지
     * 복용 중인 약물과의 호환성
   - 예: \"피로 고민 + 야근 자주 + 수면 질 나쁨 → 멜라토닌 추천 (수면 개선으로 피로 완화)\"";

const RULES: &str = "규칙:
1. JSON만 출력 (설명 없음)
2. supplements 최소 1개
3. name은 한국어 (예: \"멜라토닌\", \"비타민 D3\")
4. dosage는 1일 기준 섭취 용량을 명시 (예: \"400 IU\", \"300 mg\", \"1000-2000 IU\")
5. reason에는 약물+생활+고민을 종합한 추천 이유를 명시
6. caution에는 약물 상호작용, 복용 시 주의사항을 명시
7. summary에는 약물 상호작용 경고와 종합 추천 근거를 포함";

/// Render the recommendation prompt for a profile
///
/// Pure and deterministic: the same profile always yields byte-identical text.
#[must_use]
pub fn build_prompt(profile: &HealthProfile) -> String {
    let smoking = if profile.smoking { "흡연" } else { "비흡연" };
    let medications = if profile.medications.trim().is_empty() {
        sentinels::NONE
    } else {
        profile.medications.as_str()
    };

    format!(
        "건강 정보 기반 영양제 추천 및 약물 상호작용 체크.

사용자: {age}세 {gender}, {weight}kg, {smoking}
복용 중인 약물: {medications}
건강 고민: {concerns}
생활 패턴: {lifestyle}

{INSTRUCTIONS}

JSON 형식으로만 출력:
{RESPONSE_SHAPE}

{RULES}",
        age = profile.age,
        gender = profile.gender.label(),
        weight = profile.weight,
        concerns = join_tags(&profile.concerns),
        lifestyle = join_tags(&profile.lifestyle),
    )
}

fn join_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        sentinels::NONE.to_owned()
    } else {
        tags.join(", ")
    }
}
