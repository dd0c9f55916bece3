// ABOUTME: Document store abstraction for the recipe catalog collections
// ABOUTME: Defines the DocumentStore trait, query filters and the typed repository wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Document Store
//!
//! Handlers never issue SQL. They talk to a [`DocumentStore`], which stores
//! each record as a JSON document inside a named collection and exposes the
//! handful of primitives the catalog needs: list, find, count, insert,
//! update and delete. [`Filter`] enumerates the queries those primitives
//! accept.
//!
//! [`Repository`] layers the typed models from `recipe_core::models` on top
//! of the untyped store.

mod repository;
/// `SQLite` implementation of [`DocumentStore`]
pub mod sqlite;

pub use repository::Repository;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use recipe_core::errors::AppResult;
use recipe_core::models::Collection;
use serde_json::Value;

/// Selection criteria accepted by the store primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Every document in the collection
    All,
    /// The document with this id
    Id(u64),
    /// Documents whose `name` equals `name` ignoring ASCII case
    NameIgnoreCase {
        /// Name to compare against
        name: String,
        /// Document to leave out of the comparison (the one being updated)
        exclude_id: Option<u64>,
    },
    /// Recipes whose `category` is this id
    CategoryRef(u64),
    /// Recipes listing this ingredient id in `ingredients` or `alternatives`
    IngredientRef(u64),
}

impl Filter {
    /// Case-insensitive name match, optionally excluding one record
    pub fn name_ignore_case(name: impl Into<String>, exclude_id: Option<u64>) -> Self {
        Self::NameIgnoreCase {
            name: name.into(),
            exclude_id,
        }
    }
}

/// Ordering applied by [`DocumentStore::find_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by `name`, ties broken by id
    #[default]
    NameAsc,
    /// Ascending by id (insertion order)
    IdAsc,
}

/// Persistence primitives consumed by the resource handlers
///
/// Documents are JSON objects carrying a numeric `id` field. The store owns
/// id assignment: [`insert`](Self::insert) overwrites whatever `id` the
/// document carried with the next value of the collection's counter.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection in the requested order
    async fn find_all(&self, collection: Collection, sort: SortOrder) -> AppResult<Vec<Value>>;

    /// First document matching `filter`, lowest id first
    async fn find_one(&self, collection: Collection, filter: &Filter) -> AppResult<Option<Value>>;

    /// Number of documents matching `filter`
    async fn count(&self, collection: Collection, filter: &Filter) -> AppResult<u64>;

    /// Persist a new document under a freshly assigned sequential id
    ///
    /// Returns the stored document including its `id`.
    async fn insert(&self, collection: Collection, document: Value) -> AppResult<Value>;

    /// Replace the stored document with the same `id`
    ///
    /// Returns `false` when no document with that id exists.
    async fn update(&self, collection: Collection, document: Value) -> AppResult<bool>;

    /// Delete at most one document matching `filter`, returning how many were removed
    async fn delete_one(&self, collection: Collection, filter: &Filter) -> AppResult<u64>;

    /// Round-trip to the backend, used by the readiness probe
    async fn ping(&self) -> AppResult<()>;

    /// Release the underlying connections
    async fn close(&self);
}
