// ABOUTME: Rule-based stand-in recommendations for mock mode
// ABOUTME: Deterministic output so clients can be developed without live model calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrio_core::models::{HealthProfile, LlmRecommendation, Supplement};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const FATIGUE_CONCERNS: &[&str] = &["피로", "피로감"];
const FATIGUE_LIFESTYLE: &[&str] = &["수면", "피로"];

/// Which mock rule set to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockVariant {
    /// Melatonin only for fatigue/sleep profiles
    Basic,
    /// Melatonin plus vitamin D3 for fatigue/sleep profiles
    #[default]
    Rich,
}

impl MockVariant {
    /// Configuration value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Rich => "rich",
        }
    }
}

impl FromStr for MockVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "rich" => Ok(Self::Rich),
            other => Err(format!("unknown mock variant '{other}'")),
        }
    }
}

/// Build a mock recommendation for a profile
///
/// Fatigue/sleep tags (exact matches) yield melatonin, plus vitamin D3 in the
/// rich variant; every other profile gets a multivitamin. The summary always
/// names age and gender and warns about interactions when medications are listed.
#[must_use]
pub fn generate_mock(profile: &HealthProfile, variant: MockVariant) -> LlmRecommendation {
    let mut supplements = Vec::new();

    if mentions_fatigue_or_sleep(profile) {
        match variant {
            MockVariant::Rich => {
                supplements.push(melatonin(
                    "일부 약물과 상호작용 가능성(예: 혈압약, 항응고제) 및 특정 질환이 있는 경우 의사와 상담.",
                ));
                supplements.push(vitamin_d3());
            }
            MockVariant::Basic => supplements.push(melatonin(
                "일부 약물(예: 혈압약, 항응고제)과 상호작용이 있을 수 있으므로, 특정 질환이 있거나 다른 약물을 복용 중이라면 의사와 상담하세요.",
            )),
        }
    }

    if supplements.is_empty() {
        supplements.push(Supplement {
            name: "종합 비타민".to_owned(),
            reason: "기본적인 영양소 보충을 위해 추천합니다.".to_owned(),
            dosage: "1정 (제조사 권장량)".to_owned(),
            caution: Some("복용 중인 약물이 있으면 의사와 상담 후 섭취하세요.".to_owned()),
        });
    }

    LlmRecommendation {
        supplements,
        summary: mock_summary(profile),
    }
}

fn mentions_fatigue_or_sleep(profile: &HealthProfile) -> bool {
    let has_tag = |tags: &[String], keywords: &[&str]| {
        tags.iter().any(|tag| keywords.contains(&tag.trim()))
    };
    has_tag(&profile.concerns, FATIGUE_CONCERNS) || has_tag(&profile.lifestyle, FATIGUE_LIFESTYLE)
}

fn melatonin(caution: &str) -> Supplement {
    Supplement {
        name: "멜라토닌".to_owned(),
        reason: "피로 고민 + 수면 질 저하 생활 패턴을 고려한 추천. 수면-각성 주기를 조절하고 수면의 질을 개선하여 피로감 완화에 도움.".to_owned(),
        dosage: "0.5-3 mg".to_owned(),
        caution: Some(caution.to_owned()),
    }
}

fn vitamin_d3() -> Supplement {
    Supplement {
        name: "비타민 D3".to_owned(),
        reason: "피로 고민 + 야근 자주 생활 패턴을 고려한 추천. 햇빛 노출이 부족한 생활에서 피로감과 근육/정서적 기분 저하를 완화하는 데 도움이 될 수 있습니다.".to_owned(),
        dosage: "1000-2000 IU".to_owned(),
        caution: Some(
            "장기간 고용량 복용 시 혈청 칼슘 수치를 확인하는 것이 좋고, 고칼슘혈증 증상에 주의.".to_owned(),
        ),
    }
}

fn mock_summary(profile: &HealthProfile) -> String {
    let mut summary = format!(
        "나이 {}세, {}을 고려한 맞춤형 영양제 추천입니다.",
        profile.age,
        profile.gender.label()
    );
    if profile.has_medications() {
        summary.push_str(&format!(
            " ⚠️ 현재 {}을 복용 중이므로 약물 상호작용을 주의해야 합니다. 반드시 의료 전문가와 상담 후 섭취하시기 바랍니다.",
            profile.medications.trim()
        ));
    }
    summary
}
