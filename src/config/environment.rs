// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, CORS, and recommendation backend settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration
//!
//! Configuration is read once at startup and is read-only afterwards. The
//! mock/live decision is resolved from it exactly once through
//! [`LlmConfig::resolve_mode`].

use nutrio_core::constants::{env_config, llm, ports, retry, timeouts};
use nutrio_core::errors::{AppError, AppResult};
use std::env;
use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::recommendation::{MockVariant, ProxyEnvelope, RetryPolicy};

/// Recommendation transport selected by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Direct `OpenAI`-compatible chat completion
    #[default]
    OpenAi,
    /// Remote recommendation service
    Proxy,
}

impl BackendKind {
    /// Configuration value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Proxy => "proxy",
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "proxy" => Ok(Self::Proxy),
            other => Err(format!("unknown backend '{other}'")),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Recommendation pipeline configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Force mock mode
    pub use_mock: bool,
    /// Mock rule set
    pub mock_variant: MockVariant,
    /// Live transport
    pub backend: BackendKind,
    /// `OpenAI` credential; `None` when unset or a placeholder
    pub openai_api_key: Option<String>,
    /// Model identifier
    pub openai_model: String,
    /// `OpenAI` API base URL
    pub openai_base_url: String,
    /// Recommendation service base URL
    pub backend_base_url: Option<String>,
    /// Recommendation service envelope
    pub proxy_envelope: ProxyEnvelope,
    /// Per-attempt time budget
    pub attempt_timeout: Duration,
    /// Retry policy
    pub retry: RetryPolicy,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            use_mock: false,
            mock_variant: MockVariant::default(),
            backend: BackendKind::default(),
            openai_api_key: None,
            openai_model: llm::DEFAULT_MODEL.to_owned(),
            openai_base_url: llm::DEFAULT_BASE_URL.to_owned(),
            backend_base_url: None,
            proxy_envelope: ProxyEnvelope::default(),
            attempt_timeout: Duration::from_secs(timeouts::LLM_ATTEMPT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

/// Why mock mode was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockReason {
    /// `USE_MOCK_API=true`
    Forced,
    /// Live backend selected but its credential or URL is missing
    MissingCredentials,
}

/// Resolved recommendation strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationMode {
    /// Rule-based recommendations, no network
    Mock {
        /// Rule set
        variant: MockVariant,
        /// Why mock mode applies
        reason: MockReason,
    },
    /// Direct chat completion
    OpenAi {
        /// Bearer credential
        api_key: String,
        /// Model identifier
        model: String,
        /// API base URL
        base_url: String,
    },
    /// Remote recommendation service
    Proxy {
        /// Service base URL
        base_url: String,
        /// Response envelope
        envelope: ProxyEnvelope,
    },
}

impl RecommendationMode {
    /// Short label for logs and readiness output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mock { .. } => "mock",
            Self::OpenAi { .. } => "openai",
            Self::Proxy { .. } => "proxy",
        }
    }
}

impl LlmConfig {
    /// Decide between mock and live operation
    ///
    /// Mock mode applies when forced or when the selected live backend lacks
    /// its credential or URL.
    #[must_use]
    pub fn resolve_mode(&self) -> RecommendationMode {
        let mock = |reason| RecommendationMode::Mock {
            variant: self.mock_variant,
            reason,
        };
        if self.use_mock {
            return mock(MockReason::Forced);
        }
        match self.backend {
            BackendKind::OpenAi => self.openai_api_key.as_ref().map_or_else(
                || mock(MockReason::MissingCredentials),
                |api_key| RecommendationMode::OpenAi {
                    api_key: api_key.clone(),
                    model: self.openai_model.clone(),
                    base_url: self.openai_base_url.clone(),
                },
            ),
            BackendKind::Proxy => self.backend_base_url.as_ref().map_or_else(
                || mock(MockReason::MissingCredentials),
                |base_url| RecommendationMode::Proxy {
                    base_url: base_url.clone(),
                    envelope: self.proxy_envelope,
                },
            ),
        }
    }

    fn from_env() -> AppResult<Self> {
        Ok(Self {
            use_mock: env_flag(env_config::USE_MOCK_API),
            mock_variant: parse_env(env_config::MOCK_VARIANT, MockVariant::default())?,
            backend: parse_env(env_config::RECOMMENDATION_BACKEND, BackendKind::default())?,
            openai_api_key: api_key_from_env(),
            openai_model: env_var_or(env_config::OPENAI_MODEL, llm::DEFAULT_MODEL),
            openai_base_url: env_var_or(env_config::OPENAI_BASE_URL, llm::DEFAULT_BASE_URL),
            backend_base_url: non_empty_env(env_config::BACKEND_BASE_URL),
            proxy_envelope: parse_env(env_config::PROXY_ENVELOPE, ProxyEnvelope::default())?,
            attempt_timeout: Duration::from_secs(parse_env(
                env_config::LLM_TIMEOUT_SECS,
                timeouts::LLM_ATTEMPT_TIMEOUT_SECS,
            )?),
            retry: RetryPolicy {
                max_retries: parse_env(env_config::LLM_MAX_RETRIES, retry::MAX_RETRIES)?,
                empty_content_base: Duration::from_millis(parse_env(
                    env_config::LLM_EMPTY_RETRY_BASE_MS,
                    retry::EMPTY_CONTENT_BASE_DELAY_MS,
                )?),
                timeout_base: Duration::from_millis(parse_env(
                    env_config::LLM_TIMEOUT_RETRY_BASE_MS,
                    retry::TIMEOUT_BASE_DELAY_MS,
                )?),
            },
        })
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// CORS settings
    pub cors: CorsConfig,
    /// Recommendation pipeline settings
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: "127.0.0.1".to_owned(),
            cors: CorsConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let http_port = match non_empty_env(env_config::HTTP_PORT) {
            Some(_) => parse_env(env_config::HTTP_PORT, ports::DEFAULT_HTTP_PORT)?,
            None => parse_env(env_config::PORT, ports::DEFAULT_HTTP_PORT)?,
        };

        let config = Self {
            http_port,
            host: env_var_or(env_config::HOST, "127.0.0.1"),
            cors: CorsConfig {
                allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            },
            llm: LlmConfig::from_env()?,
        };
        info!("Configuration loaded from environment");
        Ok(config)
    }

    /// Human-readable summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        let mode = self.llm.resolve_mode();
        format!(
            "Nutrio Server Configuration:\n\
             - Listen: {}:{}\n\
             - CORS Origins: {}\n\
             - Recommendation Mode: {}\n\
             - Backend: {}\n\
             - Model: {}\n\
             - Mock Variant: {}\n\
             - Attempt Timeout: {}s\n\
             - Max Retries: {}",
            self.host,
            self.http_port,
            self.cors.allowed_origins,
            mode.label(),
            self.llm.backend.as_str(),
            self.llm.openai_model,
            self.llm.mock_variant.as_str(),
            self.llm.attempt_timeout.as_secs(),
            self.llm.retry.max_retries,
        )
    }
}

/// Read an environment variable with a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a non-blank environment variable
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Boolean flag: `true` or `1` enables it
fn env_flag(key: &str) -> bool {
    non_empty_env(key).is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    non_empty_env(key).map_or(Ok(default), |raw| {
        raw.parse::<T>().map_err(|e| {
            AppError::config_invalid(key, &raw).with_source(ConfigValueError(e.to_string()))
        })
    })
}

/// Read the API key, treating the sample placeholder as unset
fn api_key_from_env() -> Option<String> {
    let key = non_empty_env(env_config::OPENAI_API_KEY)?;
    if key.contains(llm::PLACEHOLDER_KEY_MARKER) {
        warn!(
            "{} contains a placeholder value; live recommendations are disabled",
            env_config::OPENAI_API_KEY
        );
        return None;
    }
    Some(key)
}

#[derive(Debug)]
struct ConfigValueError(String);

impl Display for ConfigValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for ConfigValueError {}
