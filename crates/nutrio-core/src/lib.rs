// ABOUTME: Core types and constants for the Nutrio supplement recommendation service
// ABOUTME: Foundation crate with error handling, health profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrio Core
//!
//! Foundation crate providing shared types and constants for the Nutrio
//! supplement recommendation service. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the `LlmError` taxonomy
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Health profile and recommendation data models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`HealthProfile`, `Supplement`, `LlmRecommendation`)
pub mod models;
