// ABOUTME: Catalog data models shared by the store, handlers and seed tooling
// ABOUTME: Re-exports Category, Ingredient, Recipe and the Document/Collection abstractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Data Models
//!
//! Records are persisted as JSON documents. Each document type knows the
//! collection it lives in and the subset of its fields exposed over the API.
//! References between records (a recipe's category, its ingredients) are
//! plain ids, never owning pointers.

mod category;
mod ingredient;
mod recipe;

pub use category::Category;
pub use ingredient::Ingredient;
pub use recipe::{IngredientQuantity, Recipe};

use crate::constants::collections;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// Entity types stored by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Recipe categories
    Categories,
    /// Ingredients
    Ingredients,
    /// Recipes
    Recipes,
}

impl Collection {
    /// Convert to store representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => collections::CATEGORIES,
            Self::Ingredients => collections::INGREDIENTS,
            Self::Recipes => collections::RECIPES,
        }
    }

    /// Singular label used in client-facing messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Categories => "Category",
            Self::Ingredients => "Ingredient",
            Self::Recipes => "Recipe",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record persisted in a store collection
///
/// The `id` of a new document is assigned by the store on insert; whatever
/// value the caller put there is replaced.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Collection the document lives in
    const COLLECTION: Collection;

    /// Fields exposed over the API, in response order
    const PUBLIC_FIELDS: &'static [&'static str];

    /// Sequential identifier
    fn id(&self) -> u64;

    /// Canonical (normalized) name
    fn name(&self) -> &str;
}
