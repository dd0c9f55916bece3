// ABOUTME: Route module organization and router composition for the catalog API
// ABOUTME: Mounts category, ingredient and recipe routes unprefixed and under /api/v1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! HTTP routes
//!
//! Each resource exposes a `XRoutes::routes(resources)` constructor. The
//! catalog routes are served both at the root and under
//! [`API_PREFIX`](recipe_core::constants::defaults::API_PREFIX); health
//! probes are served at the root only.

/// Category endpoints
pub mod categories;
/// Response envelopes shared by the handlers
pub mod common;
/// Health and readiness probes
pub mod health;
/// Ingredient endpoints
pub mod ingredients;
/// Recipe endpoints
pub mod recipes;

pub use categories::CategoryRoutes;
pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;

use crate::resources::ServerResources;
use axum::{http::Uri, Router};
use recipe_core::constants::defaults::API_PREFIX;
use recipe_core::errors::AppError;
use std::sync::Arc;

/// Category, ingredient and recipe routes without any prefix
pub fn catalog_routes(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(CategoryRoutes::routes(Arc::clone(resources)))
        .merge(IngredientRoutes::routes(Arc::clone(resources)))
        .merge(RecipeRoutes::routes(Arc::clone(resources)))
}

/// Full application router without middleware layers
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let catalog = catalog_routes(resources);
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(catalog.clone())
        .nest(API_PREFIX, catalog)
        .fallback(handle_not_found)
}

/// Unknown route: 404 with the failure envelope
async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route '{}'", uri.path()))
}
