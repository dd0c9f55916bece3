// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds in-memory stores, server resources and seeded catalog fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_catalog`

use recipe_catalog::config::{DatabaseConfig, Environment, ServerConfig};
use recipe_catalog::database::SqliteStore;
use recipe_catalog::resources::ServerResources;
use recipe_catalog::server;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store with migrations applied
pub async fn create_test_store() -> SqliteStore {
    init_test_logging();
    SqliteStore::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory store")
}

/// Configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database: DatabaseConfig::in_memory(),
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory store
pub async fn create_test_resources() -> Arc<ServerResources> {
    let store = create_test_store().await;
    Arc::new(ServerResources::new(Arc::new(store), Arc::new(test_config())))
}

/// Fully layered application router over a fresh in-memory store
pub async fn create_test_app() -> (axum::Router, Arc<ServerResources>) {
    let resources = create_test_resources().await;
    (server::app(&resources), resources)
}
