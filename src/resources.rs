// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Holds the configuration and the document store handle opened at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use crate::config::ServerConfig;
use crate::database::{DocumentStore, Repository, SqliteStore};
use recipe_core::errors::AppResult;
use recipe_core::models::{Category, Ingredient, Recipe};
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Document store shared by all handlers
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap an already opened store
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }

    /// Open the `SQLite` store described by `config`
    pub async fn open(config: ServerConfig) -> AppResult<Self> {
        let store = SqliteStore::connect(&config.database.url, config.database.max_connections)
            .await?;
        Ok(Self::new(Arc::new(store), Arc::new(config)))
    }

    /// Typed access to categories
    #[must_use]
    pub fn categories(&self) -> Repository<Category> {
        Repository::new(Arc::clone(&self.store))
    }

    /// Typed access to ingredients
    #[must_use]
    pub fn ingredients(&self) -> Repository<Ingredient> {
        Repository::new(Arc::clone(&self.store))
    }

    /// Typed access to recipes
    #[must_use]
    pub fn recipes(&self) -> Repository<Recipe> {
        Repository::new(Arc::clone(&self.store))
    }
}
