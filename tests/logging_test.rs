// ABOUTME: Tests for logging configuration loaded from the environment
// ABOUTME: Covers format selection, production defaults, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrio_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOG_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn with_log_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    for key in LOG_VARS {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }
    f();
    for key in LOG_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_unset_env_matches_defaults() {
    with_log_env(&[], || {
        let from_env = LoggingConfig::from_env();
        let defaults = LoggingConfig::default();
        assert_eq!(from_env.level, defaults.level);
        assert_eq!(from_env.format, LogFormat::Pretty);
        assert_eq!(from_env.service_name, "nutrio-server");
        assert_eq!(from_env.environment, "development");
        assert!(!from_env.include_location);
        assert!(!from_env.include_spans);
    });
}

#[test]
#[serial]
fn test_format_and_level_from_env() {
    with_log_env(&[("LOG_FORMAT", "json"), ("RUST_LOG", "debug")], || {
        let config = LoggingConfig::from_env();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    });
    with_log_env(&[("LOG_FORMAT", "compact")], || {
        assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
    });
    with_log_env(&[("LOG_FORMAT", "xml")], || {
        assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);
    });
}

#[test]
#[serial]
fn test_production_includes_location_and_thread() {
    with_log_env(
        &[("ENVIRONMENT", "production"), ("SERVICE_NAME", "nutrio-edge")],
        || {
            let config = LoggingConfig::from_env();
            assert!(config.include_location);
            assert!(config.include_thread);
            assert!(!config.include_spans);
            assert_eq!(config.service_name, "nutrio-edge");
        },
    );
}
