// ABOUTME: HTTP server binary for the Nutrio supplement recommendation service
// ABOUTME: Loads configuration from the environment, initializes logging, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Nutrio Server Binary
//!
//! Starts the recommendation API. Without an `OPENAI_API_KEY` (or with
//! `USE_MOCK_API=true`) it serves rule-based mock recommendations.

use anyhow::Result;
use clap::Parser;
use nutrio_server::{config::ServerConfig, logging, server::NutrioServer};
use tracing::info;

#[derive(Parser)]
#[command(name = "nutrio-server")]
#[command(about = "Nutrio - health profile based supplement recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Serve mock recommendations regardless of credentials
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if args.mock {
        config.llm.use_mock = true;
    }

    logging::init_from_env()?;

    info!("Starting Nutrio recommendation server");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    NutrioServer::from_config(config)?.run().await
}

/// Display all available API endpoints at startup
fn display_available_endpoints(config: &ServerConfig) {
    let host = config.host.as_str();
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    display_recommendation_endpoints(host, port);
    display_monitoring_endpoints(host, port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_recommendation_endpoints(host: &str, port: u16) {
    info!("Recommendations:");
    info!("   Recommend:         POST http://{host}:{port}/recommendation");
    info!("   Recommend (alias): POST http://{host}:{port}/api/recommendation");
    info!("   Recommend (alias): POST http://{host}:{port}/health/recommend");
}

fn display_monitoring_endpoints(host: &str, port: u16) {
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
}
