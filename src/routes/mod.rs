// ABOUTME: Route module organization for the Nutrio HTTP endpoints
// ABOUTME: Health probes and the recommendation pipeline, each in its own domain module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP routes
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the recommendation pipeline.

/// Health check and readiness routes
pub mod health;
/// Supplement recommendation routes
pub mod recommendation;

pub use health::HealthRoutes;
pub use recommendation::RecommendationRoutes;
