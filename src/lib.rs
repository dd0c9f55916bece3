// ABOUTME: Main library entry point for the recipe catalog REST API
// ABOUTME: Wires validation, the document store, integrity checks and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![deny(unsafe_code)]

//! # Recipe Catalog
//!
//! A REST API for a recipe catalog: categories, ingredients and recipes with
//! CRUD endpoints and referential-integrity checks.
//!
//! Every write handler runs the same linear pipeline:
//! validate and normalize the input, check name uniqueness and references
//! against the store, write, then project the stored record into the
//! response.
//!
//! ## Architecture
//!
//! - **validation**: Identifier parsing, text sanitizers and canonical casing
//! - **database**: `DocumentStore` trait and its `SQLite` implementation
//! - **integrity**: Uniqueness, reference and delete-guard checks
//! - **projection**: Shaping stored documents into API responses
//! - **routes**: axum handlers for each resource
//! - **server**: Middleware stack and graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_catalog::config::ServerConfig;
//! use recipe_catalog::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::open(config).await?;
//!     recipe_catalog::server::run(Arc::new(resources)).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Document store abstraction and `SQLite` backend
pub mod database;

/// Uniqueness, reference and delete-guard checks
pub mod integrity;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids, tracing)
pub mod middleware;

/// Field projection of stored documents
pub mod projection;

/// Shared resources injected into handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Sample catalog data loader
pub mod seed;

/// Server assembly and lifecycle
pub mod server;

/// Input parsing and normalization
pub mod validation;

pub use recipe_core::errors;
pub use recipe_core::models;
