// ABOUTME: Health profile and model-output fixtures shared across integration tests
// ABOUTME: Builders for valid profiles plus canned recommendation JSON

use nutrio_server::models::{Gender, HealthProfile};
use nutrio_server::recommendation::validate_profile;
use serde_json::{json, Value};

/// Raw submission for a 29-year-old male with fatigue and sleep tags
pub fn fatigue_profile_json() -> Value {
    json!({
        "age": 29,
        "gender": "male",
        "weight": 70,
        "smoking": false,
        "medications": "없음",
        "concerns": ["피로"],
        "lifestyle": ["수면"]
    })
}

/// Raw submission for a 65-year-old female on warfarin
pub fn warfarin_profile_json() -> Value {
    json!({
        "age": 65,
        "gender": "female",
        "weight": 58.5,
        "smoking": false,
        "medications": "와파린",
        "concerns": ["관절"],
        "lifestyle": ["운동 부족"]
    })
}

/// Validated fatigue profile
pub fn fatigue_profile() -> HealthProfile {
    validate_profile(&fatigue_profile_json()).expect("fixture must validate")
}

/// Validated warfarin profile
pub fn warfarin_profile() -> HealthProfile {
    validate_profile(&warfarin_profile_json()).expect("fixture must validate")
}

/// Profile built directly, bypassing validation
pub fn profile(age: u32, gender: Gender, concerns: &[&str], lifestyle: &[&str]) -> HealthProfile {
    HealthProfile {
        age,
        gender,
        weight: 70.0,
        smoking: false,
        medications: String::new(),
        concerns: concerns.iter().map(|s| (*s).to_owned()).collect(),
        lifestyle: lifestyle.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Well-formed model output
pub fn valid_recommendation_json() -> Value {
    json!({
        "supplements": [
            {
                "name": "마그네슘",
                "reason": "수면의 질 개선에 도움을 줄 수 있습니다.",
                "dosage": "1일 300mg, 저녁 식후",
                "caution": "신장 질환이 있으면 의사와 상담하세요."
            },
            {
                "name": "비타민 B군",
                "reason": "에너지 대사를 돕습니다.",
                "dosage": "1일 1정, 아침 식후"
            }
        ],
        "summary": "피로와 수면 문제를 고려한 추천입니다."
    })
}
