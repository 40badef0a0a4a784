// ABOUTME: Supplement recommendation route handlers
// ABOUTME: Validates the submitted health profile and returns a recommendation or a typed error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recommendation routes
//!
//! `POST /recommendation` and its aliases accept either `{"profile": {...}}`
//! or the bare profile object. Validation failures answer 400; fetch
//! failures answer with the status of their error kind. Every error body is
//! `{"type": ..., "message": ...}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use nutrio_core::constants::endpoints;
use nutrio_core::constants::messages::validation as msg;
use nutrio_core::errors::LlmError;
use nutrio_core::models::LlmRecommendation;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::recommendation::{is_fallback, validate_profile, RecommendationFetcher};

/// Recommendation routes implementation
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the recommendation route and its aliases
    pub fn routes(fetcher: Arc<RecommendationFetcher>) -> Router {
        Router::new()
            .route(endpoints::RECOMMENDATION, post(Self::handle_recommend))
            .route(endpoints::API_RECOMMENDATION, post(Self::handle_recommend))
            .route(endpoints::HEALTH_RECOMMEND, post(Self::handle_recommend))
            .with_state(fetcher)
    }

    async fn handle_recommend(
        State(fetcher): State<Arc<RecommendationFetcher>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<LlmRecommendation>, LlmError> {
        let Json(body) = body.map_err(|rejection| {
            warn!(error = %rejection, "Rejected recommendation request body");
            LlmError::validation(msg::MALFORMED_PROFILE)
        })?;

        let candidate = unwrap_profile(&body);
        let profile = validate_profile(candidate).map_err(|e| {
            warn!(field = %e.field, reason = %e.reason, "Profile validation failed");
            LlmError::from(e)
        })?;

        let recommendation = fetcher.fetch(&profile).await?;
        info!(
            mode = fetcher.mode_label(),
            supplements = recommendation.supplements.len(),
            fallback = is_fallback(&recommendation),
            "Recommendation served"
        );
        Ok(Json(recommendation))
    }
}

/// Profile object from either request shape
fn unwrap_profile(body: &Value) -> &Value {
    match body.get("profile") {
        Some(profile) if profile.is_object() => profile,
        _ => body,
    }
}
