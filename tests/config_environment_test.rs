// ABOUTME: Tests for environment-based server configuration
// ABOUTME: Covers defaults, mock mode resolution, proxy selection, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrio_server::config::{BackendKind, MockReason, RecommendationMode, ServerConfig};
use nutrio_server::errors::ErrorCode;
use nutrio_server::recommendation::{MockVariant, ProxyEnvelope};
use serial_test::serial;
use std::env;
use std::time::Duration;

const ALL_VARS: &[&str] = &[
    "HTTP_PORT",
    "PORT",
    "HOST",
    "CORS_ALLOWED_ORIGINS",
    "USE_MOCK_API",
    "MOCK_VARIANT",
    "RECOMMENDATION_BACKEND",
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "OPENAI_BASE_URL",
    "BACKEND_BASE_URL",
    "PROXY_ENVELOPE",
    "LLM_TIMEOUT_SECS",
    "LLM_MAX_RETRIES",
    "LLM_EMPTY_RETRY_BASE_MS",
    "LLM_TIMEOUT_RETRY_BASE_MS",
];

/// Run `f` with only the given variables set, restoring a clean slate after
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    for key in ALL_VARS {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }
    f();
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    with_env(&[], || {
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 3001);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.llm.backend, BackendKind::OpenAi);
        assert_eq!(config.llm.openai_model, "gpt-4o-mini");
        assert_eq!(config.llm.attempt_timeout, Duration::from_secs(60));
        assert_eq!(config.llm.retry.max_retries, 2);
        assert_eq!(config.llm.retry.max_attempts(), 3);
        assert_eq!(
            config.llm.resolve_mode(),
            RecommendationMode::Mock {
                variant: MockVariant::Rich,
                reason: MockReason::MissingCredentials,
            }
        );
    });
}

#[test]
#[serial]
fn test_placeholder_key_means_mock() {
    with_env(&[("OPENAI_API_KEY", "your_api_key_here")], || {
        let config = ServerConfig::from_env().unwrap();
        assert!(config.llm.openai_api_key.is_none());
        assert!(matches!(
            config.llm.resolve_mode(),
            RecommendationMode::Mock {
                reason: MockReason::MissingCredentials,
                ..
            }
        ));
    });
}

#[test]
#[serial]
fn test_real_key_selects_openai() {
    with_env(
        &[
            ("OPENAI_API_KEY", "sk-test-123"),
            ("OPENAI_MODEL", "gpt-5-nano"),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(
                config.llm.resolve_mode(),
                RecommendationMode::OpenAi {
                    api_key: "sk-test-123".to_owned(),
                    model: "gpt-5-nano".to_owned(),
                    base_url: "https://api.openai.com/v1".to_owned(),
                }
            );
        },
    );
}

#[test]
#[serial]
fn test_use_mock_overrides_credentials() {
    with_env(
        &[
            ("OPENAI_API_KEY", "sk-test-123"),
            ("USE_MOCK_API", "true"),
            ("MOCK_VARIANT", "basic"),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(
                config.llm.resolve_mode(),
                RecommendationMode::Mock {
                    variant: MockVariant::Basic,
                    reason: MockReason::Forced,
                }
            );
        },
    );
}

#[test]
#[serial]
fn test_use_mock_only_accepts_true_or_one() {
    with_env(&[("USE_MOCK_API", "yes")], || {
        let config = ServerConfig::from_env().unwrap();
        assert!(!config.llm.use_mock);
    });
    with_env(&[("USE_MOCK_API", "1")], || {
        let config = ServerConfig::from_env().unwrap();
        assert!(config.llm.use_mock);
    });
}

#[test]
#[serial]
fn test_proxy_backend_resolution() {
    with_env(
        &[
            ("RECOMMENDATION_BACKEND", "proxy"),
            ("BACKEND_BASE_URL", "http://localhost:8000"),
            ("PROXY_ENVELOPE", "bare"),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(
                config.llm.resolve_mode(),
                RecommendationMode::Proxy {
                    base_url: "http://localhost:8000".to_owned(),
                    envelope: ProxyEnvelope::Bare,
                }
            );
        },
    );

    with_env(&[("RECOMMENDATION_BACKEND", "proxy")], || {
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.llm.resolve_mode().label(), "mock");
    });
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    for (key, value) in [
        ("LLM_TIMEOUT_SECS", "soon"),
        ("LLM_MAX_RETRIES", "-1"),
        ("RECOMMENDATION_BACKEND", "grpc"),
        ("MOCK_VARIANT", "fancy"),
        ("HTTP_PORT", "99999"),
    ] {
        with_env(&[(key, value)], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert_eq!(err.code, ErrorCode::ConfigInvalid, "{key}={value}");
            assert!(err.message.contains(key));
        });
    }
}

#[test]
#[serial]
fn test_port_fallback_and_precedence() {
    with_env(&[("PORT", "8080")], || {
        assert_eq!(ServerConfig::from_env().unwrap().http_port, 8080);
    });
    with_env(&[("PORT", "8080"), ("HTTP_PORT", "9090")], || {
        assert_eq!(ServerConfig::from_env().unwrap().http_port, 9090);
    });
}

#[test]
#[serial]
fn test_retry_tuning_from_env() {
    with_env(
        &[
            ("LLM_MAX_RETRIES", "4"),
            ("LLM_EMPTY_RETRY_BASE_MS", "250"),
            ("LLM_TIMEOUT_RETRY_BASE_MS", "500"),
            ("LLM_TIMEOUT_SECS", "15"),
        ],
        || {
            let llm = ServerConfig::from_env().unwrap().llm;
            assert_eq!(llm.retry.max_attempts(), 5);
            assert_eq!(llm.retry.empty_content_base, Duration::from_millis(250));
            assert_eq!(llm.retry.timeout_base, Duration::from_millis(500));
            assert_eq!(llm.attempt_timeout, Duration::from_secs(15));
        },
    );
}

#[test]
#[serial]
fn test_summary_omits_secrets() {
    with_env(&[("OPENAI_API_KEY", "sk-secret-value")], || {
        let summary = ServerConfig::from_env().unwrap().summary();
        assert!(summary.contains("Recommendation Mode: openai"));
        assert!(summary.contains("Model: gpt-4o-mini"));
        assert!(!summary.contains("sk-secret-value"));
    });
}
