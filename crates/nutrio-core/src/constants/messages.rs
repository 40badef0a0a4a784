// ABOUTME: User-facing Korean messages for errors, validation, and the safe-mode fallback
// ABOUTME: Kept together so the sanitized wording returned to clients has one home
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Fallback recommendation texts
pub mod fallback {
    /// Supplement name of the safe-mode entry
    pub const SUPPLEMENT_NAME: &str = "종합 비타민";
    /// Dosage of the safe-mode entry
    pub const DOSAGE: &str = "1정 (제조사 권장량)";
    /// Reason of the safe-mode entry
    pub const REASON: &str = "기본적인 영양소 보충을 위해 추천합니다.";
    /// Caution of the safe-mode entry
    pub const CAUTION: &str = "개인 맞춤 추천을 위해 정확한 정보 입력이 필요합니다.";
    /// Marker contained in every safe-mode summary
    pub const SAFE_MODE_MARKER: &str = "안전 모드";
    /// Summary of the safe-mode recommendation
    pub const SUMMARY: &str = "안전 모드 추천입니다. 정확한 추천을 위해 다시 시도해주세요.";
}

/// Fetcher error messages
pub mod fetch {
    /// Transport timeout or upstream 408 after the retry budget
    pub const TIMEOUT: &str = "API 호출 시간이 초과되었습니다. 다시 시도해주세요.";
    /// Upstream 429
    pub const QUOTA_EXCEEDED: &str =
        "API 사용량 한도를 초과했습니다 (429). OpenAI 계정의 결제 정보와 사용량을 확인해주세요.";
    /// Empty completion after the retry budget
    pub const EMPTY_CONTENT: &str = "API 응답이 비어있습니다.";
    /// Empty completion cut at the token cap
    pub const TRUNCATED: &str = "API 응답이 토큰 한도에 도달하여 비어있습니다.";
    /// Response envelope without the expected content field
    pub const MISSING_CONTENT: &str = "API 응답에 추천 결과가 포함되어 있지 않습니다.";
    /// Transport failure reaching the model API
    pub const NETWORK: &str = "네트워크 연결을 확인해주세요.";
    /// Transport failure reaching the recommendation proxy
    pub const PROXY_UNREACHABLE: &str =
        "백엔드 서버에 연결할 수 없습니다. 서버가 실행 중인지 확인해주세요.";
    /// Unexpected server-side failure
    pub const INTERNAL: &str = "추천 처리 중 알 수 없는 오류가 발생했습니다.";
}

/// Profile validation messages
pub mod validation {
    /// Age absent
    pub const AGE_REQUIRED: &str = "나이를 입력해주세요";
    /// Age not a number
    pub const AGE_NOT_NUMBER: &str = "나이는 숫자여야 합니다";
    /// Age not an integer
    pub const AGE_NOT_INTEGER: &str = "나이는 정수여야 합니다";
    /// Age below minimum
    pub const AGE_TOO_LOW: &str = "나이는 1 이상이어야 합니다";
    /// Age above maximum
    pub const AGE_TOO_HIGH: &str = "나이는 150 이하여야 합니다";
    /// Weight absent
    pub const WEIGHT_REQUIRED: &str = "체중을 입력해주세요";
    /// Weight not a number
    pub const WEIGHT_NOT_NUMBER: &str = "체중은 숫자여야 합니다";
    /// Weight below minimum
    pub const WEIGHT_TOO_LOW: &str = "체중은 1kg 이상이어야 합니다";
    /// Weight above maximum
    pub const WEIGHT_TOO_HIGH: &str = "체중은 500kg 이하여야 합니다";
    /// Gender absent
    pub const GENDER_REQUIRED: &str = "성별을 선택해주세요";
    /// Gender not one of the accepted values
    pub const GENDER_INVALID: &str = "성별은 male, female, other 중 하나여야 합니다";
    /// Medications not a string
    pub const MEDICATIONS_NOT_STRING: &str = "약물 정보는 문자열이어야 합니다";
    /// Medications text too long
    pub const MEDICATIONS_TOO_LONG: &str = "약물 정보는 500자 이하여야 합니다";
    /// Concern tag too long
    pub const CONCERN_TOO_LONG: &str = "건강 고민 항목은 500자 이하여야 합니다";
    /// Lifestyle tag too long
    pub const LIFESTYLE_TOO_LONG: &str = "생활 패턴 항목은 500자 이하여야 합니다";
    /// Concerns not a list of strings
    pub const CONCERNS_NOT_LIST: &str = "건강 고민은 문자열 목록이어야 합니다";
    /// Lifestyle not a list of strings
    pub const LIFESTYLE_NOT_LIST: &str = "생활 패턴은 문자열 목록이어야 합니다";
    /// No concern selected
    pub const CONCERNS_EMPTY: &str = "건강 고민을 최소 1개 이상 선택해주세요";
    /// No lifestyle selected
    pub const LIFESTYLE_EMPTY: &str = "생활 패턴을 최소 1개 이상 선택해주세요";
    /// Smoking not a boolean
    pub const SMOKING_NOT_BOOLEAN: &str = "흡연 여부는 선택 필수입니다";
    /// Request body is not a profile object
    pub const MALFORMED_PROFILE: &str = "건강 정보 형식이 올바르지 않습니다.";
}
