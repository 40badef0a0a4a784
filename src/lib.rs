// ABOUTME: Main library entry point for the Nutrio supplement recommendation service
// ABOUTME: Turns a validated health profile into LLM-backed supplement recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrio Server
//!
//! Accepts a health profile (age, gender, weight, smoking, medications,
//! concerns, lifestyle), asks a language model for supplement
//! recommendations with a drug-interaction safety check, and returns a
//! validated recommendation. Malformed model output degrades to a fixed
//! safe-mode recommendation; transport failures surface as typed errors.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven server and backend settings
//! - **Recommendation**: validation, prompt, fetch with retries, parsing, mock
//! - **LLM**: `OpenAI`-compatible chat completion client
//! - **Routes**: health probes and the recommendation endpoint
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrio_server::recommendation::{validate_profile, RecommendationFetcher, MockVariant};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = validate_profile(&json!({
//!     "age": 29, "gender": "male", "weight": 70,
//!     "concerns": ["피로"], "lifestyle": ["수면"]
//! }))?;
//! let fetcher = RecommendationFetcher::mock(MockVariant::Rich);
//! let recommendation = fetcher.fetch(&profile).await?;
//! println!("{}", recommendation.summary);
//! # Ok(())
//! # }
//! ```

/// Configuration management
pub mod config;

/// Structured logging setup
pub mod logging;

/// `OpenAI`-compatible chat completion client
pub mod llm;

/// HTTP middleware
pub mod middleware;

/// Recommendation pipeline
pub mod recommendation;

/// HTTP routes
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

pub use nutrio_core::{constants, errors, models};
