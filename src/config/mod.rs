// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes environment-driven server, CORS, and recommendation backend configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the Nutrio server
//!
//! - **Environment**: listen address, CORS origins, and the recommendation
//!   backend (mock, direct `OpenAI`, or proxy) with its retry/timeout policy

/// Environment and server configuration
pub mod environment;

pub use environment::{
    BackendKind, CorsConfig, LlmConfig, MockReason, RecommendationMode, ServerConfig,
};
