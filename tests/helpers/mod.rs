// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Profile fixtures, a scripted backend, and an in-process fake upstream server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod fixtures;
pub mod scripted_backend;

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its base URL
pub async fn spawn_fake_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake upstream");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake upstream failed");
    });
    format!("http://{addr}")
}
