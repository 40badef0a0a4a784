// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints including the reported mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::scripted_backend::{ScriptedBackend, Step};
use nutrio_server::recommendation::{
    FetchStrategy, MockVariant, RecommendationFetcher, RetryPolicy, PROMPT_VERSION,
};
use nutrio_server::routes::HealthRoutes;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

fn health_routes() -> axum::Router {
    HealthRoutes::routes(Arc::new(RecommendationFetcher::mock(MockVariant::Basic)))
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_mock_mode() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["mode"], "mock");
    assert_eq!(body["mock"], true);
    assert_eq!(body["prompt_version"], PROMPT_VERSION);
    assert_eq!(body["max_attempts"], 3);
}

#[tokio::test]
async fn test_ready_reports_live_backend() {
    let backend = ScriptedBackend::new(vec![Step::Answer(String::new())]);
    let fetcher = RecommendationFetcher::new(
        FetchStrategy::Live(backend),
        RetryPolicy {
            max_retries: 4,
            ..RetryPolicy::default()
        },
        Duration::from_secs(60),
    );
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes(Arc::new(fetcher)))
        .await;

    let body: Value = response.json();
    assert_eq!(body["mode"], "scripted");
    assert_eq!(body["mock"], false);
    assert_eq!(body["max_attempts"], 5);
}

#[tokio::test]
async fn test_health_rejects_post() {
    let response = AxumTestRequest::post("/health").send(health_routes()).await;
    assert_eq!(response.status(), 405);
}
