// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for profile limits, LLM calls, retries, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// User-facing messages returned in error bodies and fallback recommendations
pub mod messages;

/// Health profile field limits
pub mod limits {
    /// Minimum accepted age in years
    pub const AGE_MIN: i64 = 1;
    /// Maximum accepted age in years
    pub const AGE_MAX: i64 = 150;
    /// Minimum accepted weight in kilograms
    pub const WEIGHT_MIN_KG: f64 = 1.0;
    /// Maximum accepted weight in kilograms
    pub const WEIGHT_MAX_KG: f64 = 500.0;
    /// Maximum length of medications text and of each tag, in characters
    pub const MAX_TEXT_CHARS: usize = 500;
}

/// Sentinel values shared by the prompt builder and mock generator
pub mod sentinels {
    /// Rendered in place of empty medications, concerns, or lifestyle
    pub const NONE: &str = "없음";
}

/// Chat completion defaults
pub mod llm {
    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    /// Default `OpenAI` API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
    /// Output token cap for regular models
    pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 2000;
    /// Output token cap for reasoning-class models
    pub const REASONING_MAX_COMPLETION_TOKENS: u32 = 10_000;
    /// Substrings of model ids that identify reasoning-class models
    pub const REASONING_MODEL_MARKERS: &[&str] = &["nano", "o1", "reasoning"];
    /// `finish_reason` value reported when output was cut at the token cap
    pub const FINISH_REASON_LENGTH: &str = "length";
    /// Fragment of the sample key shipped in `.env.example`; treated as unset
    pub const PLACEHOLDER_KEY_MARKER: &str = "your_api";
}

/// Timeouts for outbound calls
pub mod timeouts {
    /// Per-attempt timeout for a recommendation call
    pub const LLM_ATTEMPT_TIMEOUT_SECS: u64 = 60;
    /// TCP connect timeout for outbound HTTP clients
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Retry policy defaults
pub mod retry {
    /// Retries after the first attempt (3 attempts total)
    pub const MAX_RETRIES: u32 = 2;
    /// Backoff base when the backend returned no usable content
    pub const EMPTY_CONTENT_BASE_DELAY_MS: u64 = 1000;
    /// Backoff base after a timeout or upstream 408
    pub const TIMEOUT_BASE_DELAY_MS: u64 = 2000;
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Alternate HTTP listen port variable
    pub const PORT: &str = "PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Forces mock mode when `true`
    pub const USE_MOCK_API: &str = "USE_MOCK_API";
    /// Mock generator variant (`rich` or `basic`)
    pub const MOCK_VARIANT: &str = "MOCK_VARIANT";
    /// Backend transport (`openai` or `proxy`)
    pub const RECOMMENDATION_BACKEND: &str = "RECOMMENDATION_BACKEND";
    /// `OpenAI` API credential
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// `OpenAI` model identifier
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// `OpenAI` API base URL
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Recommendation proxy base URL
    pub const BACKEND_BASE_URL: &str = "BACKEND_BASE_URL";
    /// Proxy response envelope (`result` or `bare`)
    pub const PROXY_ENVELOPE: &str = "PROXY_ENVELOPE";
    /// Per-attempt timeout in seconds
    pub const LLM_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
    /// Retry budget
    pub const LLM_MAX_RETRIES: &str = "LLM_MAX_RETRIES";
    /// Backoff base for empty content, in milliseconds
    pub const LLM_EMPTY_RETRY_BASE_MS: &str = "LLM_EMPTY_RETRY_BASE_MS";
    /// Backoff base for timeouts and 408, in milliseconds
    pub const LLM_TIMEOUT_RETRY_BASE_MS: &str = "LLM_TIMEOUT_RETRY_BASE_MS";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3001;
}

/// API endpoints
pub mod endpoints {
    /// Liveness endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// Primary recommendation endpoint
    pub const RECOMMENDATION: &str = "/recommendation";
    /// Recommendation endpoint used by the web client proxy
    pub const API_RECOMMENDATION: &str = "/api/recommendation";
    /// Recommendation endpoint used by the serverless backend variant
    pub const HEALTH_RECOMMEND: &str = "/health/recommend";
}

/// HTTP server limits
pub mod http {
    /// Maximum accepted request body size
    pub const MAX_BODY_BYTES: usize = 64 * 1024;
}

/// Service identification
pub mod service_names {
    /// Server service name used in structured logs
    pub const NUTRIO_SERVER: &str = "nutrio-server";
}
