// ABOUTME: Nutrio CLI - offline tooling for the supplement recommendation pipeline
// ABOUTME: Validates profiles, renders prompts, parses model output, and runs recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Validate and normalize a profile
//! nutrio-cli validate --profile profile.json
//!
//! # Show the prompt that would be sent to the model
//! nutrio-cli prompt --profile profile.json
//!
//! # Run the parser on a saved model response
//! nutrio-cli parse --response response.txt
//!
//! # Get a recommendation (mock unless a backend is configured)
//! nutrio-cli recommend --profile profile.json --mock
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrio_server::recommendation::MockVariant;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrio-cli",
    about = "Nutrio recommendation pipeline CLI",
    long_about = "Command-line tool for validating health profiles, inspecting prompts and model output, and requesting supplement recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate and normalize a profile JSON file
    Validate {
        /// Profile JSON file (`{"profile": {...}}` or a bare profile)
        #[arg(long)]
        profile: PathBuf,
    },

    /// Print the prompt rendered for a profile
    Prompt {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Parse a raw model response into a recommendation
    Parse {
        /// File holding the raw model output
        #[arg(long)]
        response: PathBuf,
    },

    /// Request a recommendation for a profile
    Recommend {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Use the mock generator regardless of configuration
        #[arg(long)]
        mock: bool,

        /// Mock rule set (rich or basic)
        #[arg(long)]
        variant: Option<MockVariant>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    debug!("Nutrio CLI");

    match cli.command {
        Command::Validate { profile } => commands::validate(&profile).await,
        Command::Prompt { profile } => commands::prompt(&profile).await,
        Command::Parse { response } => commands::parse(&response).await,
        Command::Recommend {
            profile,
            mock,
            variant,
        } => commands::recommend(&profile, mock, variant).await,
    }
}
