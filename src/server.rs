// ABOUTME: HTTP server assembly and lifecycle for the recommendation service
// ABOUTME: Builds the axum router with middleware layers and serves it until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use nutrio_core::constants::http as http_limits;
use std::future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::middleware::{request_id_layers, setup_cors, trace_layer};
use crate::recommendation::RecommendationFetcher;
use crate::routes::{HealthRoutes, RecommendationRoutes};

/// Recommendation HTTP server
pub struct NutrioServer {
    config: ServerConfig,
    fetcher: Arc<RecommendationFetcher>,
}

impl NutrioServer {
    /// Create a server for a loaded configuration
    #[must_use]
    pub const fn new(config: ServerConfig, fetcher: Arc<RecommendationFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Build the fetcher from configuration and create the server
    ///
    /// # Errors
    ///
    /// Returns an error if a live backend client cannot be created.
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let fetcher = RecommendationFetcher::from_config(&config.llm)?;
        Ok(Self::new(config, Arc::new(fetcher)))
    }

    /// Shared fetcher
    #[must_use]
    pub fn fetcher(&self) -> Arc<RecommendationFetcher> {
        Arc::clone(&self.fetcher)
    }

    /// Router with all routes and middleware
    pub fn router(&self) -> Router {
        build_router(&self.config, Arc::clone(&self.fetcher))
    }

    /// Bind and serve until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, binding fails, or the
    /// server stops abnormally.
    pub async fn run(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.http_port)
            .parse()
            .context("invalid server address/port")?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind to {addr}"))?;

        info!(%addr, mode = self.fetcher.mode_label(), "Nutrio server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server failure")?;

        info!("Nutrio server stopped");
        Ok(())
    }
}

/// Assemble routes and middleware
pub fn build_router(config: &ServerConfig, fetcher: Arc<RecommendationFetcher>) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&fetcher)))
        .merge(RecommendationRoutes::routes(fetcher))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(http_limits::MAX_BODY_BYTES))
        .layer(setup_cors(config))
        .layer(propagate_request_id)
        .layer(trace_layer())
        .layer(set_request_id)
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
