// ABOUTME: Command implementations for the Nutrio CLI
// ABOUTME: Each command loads its input file and drives one stage of the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{anyhow, bail, Context, Result};
use nutrio_server::config::ServerConfig;
use nutrio_server::models::HealthProfile;
use nutrio_server::recommendation::{
    build_prompt, is_fallback, parse_recommendation, validate_profile, MockVariant,
    RecommendationFetcher,
};
use serde_json::Value;
use std::path::Path;
use tokio::{fs, signal};
use tokio_util::sync::CancellationToken;
use tracing::warn;

async fn load_profile(path: &Path) -> Result<HealthProfile> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let body: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let candidate = body.get("profile").filter(|p| p.is_object()).unwrap_or(&body);
    validate_profile(candidate).map_err(|e| anyhow!("{}: {}", e.field, e.reason))
}

/// Print the normalized profile
pub async fn validate(path: &Path) -> Result<()> {
    let profile = load_profile(path).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Print the rendered prompt
pub async fn prompt(path: &Path) -> Result<()> {
    let profile = load_profile(path).await?;
    println!("{}", build_prompt(&profile));
    Ok(())
}

/// Parse saved model output
pub async fn parse(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let recommendation = parse_recommendation(&raw);
    if is_fallback(&recommendation) {
        warn!("Response rejected; showing safe-mode fallback");
    }
    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}

/// Fetch a recommendation, cancelled by ctrl-c
pub async fn recommend(path: &Path, mock: bool, variant: Option<MockVariant>) -> Result<()> {
    let profile = load_profile(path).await?;

    let mut config = ServerConfig::from_env()?;
    if mock {
        config.llm.use_mock = true;
    }
    if let Some(variant) = variant {
        config.llm.mock_variant = variant;
    }
    let fetcher = RecommendationFetcher::from_config(&config.llm)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match fetcher.fetch_cancellable(&profile, &cancel).await {
        Some(Ok(recommendation)) => {
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
            Ok(())
        }
        Some(Err(e)) => bail!("{e}"),
        None => bail!("cancelled"),
    }
}
