// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness probes including the resolved recommendation mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check routes for service monitoring

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use nutrio_core::constants::endpoints;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::recommendation::{RecommendationFetcher, PROMPT_VERSION};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(fetcher: Arc<RecommendationFetcher>) -> Router {
        Router::new()
            .route(endpoints::HEALTH_CHECK, get(Self::handle_health))
            .route(endpoints::READY, get(Self::handle_ready))
            .with_state(fetcher)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(fetcher): State<Arc<RecommendationFetcher>>) -> Json<Value> {
        let policy = fetcher.policy();
        Json(json!({
            "status": "ready",
            "mode": fetcher.mode_label(),
            "mock": fetcher.is_mock(),
            "prompt_version": PROMPT_VERSION,
            "max_attempts": policy.max_attempts(),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
