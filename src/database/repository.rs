// ABOUTME: Typed repository over the untyped document store
// ABOUTME: Serializes catalog models to JSON documents and back for each collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::{DocumentStore, Filter, SortOrder};
use recipe_core::errors::AppResult;
use recipe_core::models::Document;
use std::marker::PhantomData;
use std::sync::Arc;

/// Typed access to the collection that stores `T`
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _document: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _document: PhantomData,
        }
    }
}

impl<T: Document> Repository<T> {
    /// Create a repository backed by `store`
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _document: PhantomData,
        }
    }

    /// All records sorted by name
    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.store
            .find_all(T::COLLECTION, SortOrder::NameAsc)
            .await?
            .into_iter()
            .map(|document| serde_json::from_value(document).map_err(Into::into))
            .collect()
    }

    /// Record with the given id, if any
    pub async fn get(&self, id: u64) -> AppResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, &Filter::Id(id))
            .await?
            .map(|document| serde_json::from_value(document).map_err(Into::into))
            .transpose()
    }

    /// Persist a new record; the returned copy carries the assigned id
    pub async fn insert(&self, record: &T) -> AppResult<T> {
        let document = serde_json::to_value(record)?;
        let stored = self.store.insert(T::COLLECTION, document).await?;
        Ok(serde_json::from_value(stored)?)
    }

    /// Overwrite an existing record, returning `false` if it no longer exists
    pub async fn save(&self, record: &T) -> AppResult<bool> {
        let document = serde_json::to_value(record)?;
        self.store.update(T::COLLECTION, document).await
    }

    /// Delete the record with the given id, returning how many were removed
    pub async fn delete(&self, id: u64) -> AppResult<u64> {
        self.store.delete_one(T::COLLECTION, &Filter::Id(id)).await
    }
}
