// ABOUTME: Store-backed pre-write checks: name uniqueness, reference existence and delete guards
// ABOUTME: Each check is a read that runs before the write it protects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Integrity Checks
//!
//! The store has no constraints of its own beyond unique ids, so handlers
//! run these checks explicitly before writing. They are check-then-act: a
//! concurrent request can still slip in between the check and the write.

use crate::database::{DocumentStore, Filter};
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::Collection;
use tracing::warn;

/// Whether another record in `collection` already uses `name` (ignoring case)
///
/// `exclude_id` leaves the record being updated out of the comparison.
pub async fn exists_matching(
    store: &dyn DocumentStore,
    collection: Collection,
    name: &str,
    exclude_id: Option<u64>,
) -> AppResult<bool> {
    let filter = Filter::name_ignore_case(name, exclude_id);
    Ok(store.count(collection, &filter).await? > 0)
}

/// Fail with `InvalidReference` unless a record with `id` exists in `collection`
pub async fn assert_exists(
    store: &dyn DocumentStore,
    collection: Collection,
    id: u64,
) -> AppResult<()> {
    if store.count(collection, &Filter::Id(id)).await? > 0 {
        Ok(())
    } else {
        Err(AppError::invalid_reference(format!(
            "{} '{id}' does not exist",
            collection.label()
        )))
    }
}

/// Number of recipes that reference the `entity` record with `id`
///
/// Ingredients count as referenced from both `ingredients` and
/// `alternatives`. Nothing references a recipe.
pub async fn count_references(
    store: &dyn DocumentStore,
    entity: Collection,
    id: u64,
) -> AppResult<u64> {
    let filter = match entity {
        Collection::Categories => Filter::CategoryRef(id),
        Collection::Ingredients => Filter::IngredientRef(id),
        Collection::Recipes => return Ok(0),
    };
    store.count(Collection::Recipes, &filter).await
}

/// Fail with `ResourceInUse` if any recipe still references the record
pub async fn assert_not_referenced(
    store: &dyn DocumentStore,
    entity: Collection,
    id: u64,
) -> AppResult<()> {
    let references = count_references(store, entity, id).await?;
    if references == 0 {
        return Ok(());
    }

    warn!(
        collection = %entity,
        id,
        references,
        "Refusing to delete referenced record"
    );
    Err(AppError::resource_in_use(
        format!(
            "{} '{id}' is used in {references} recipes.",
            entity.label()
        ),
        references,
    ))
}
