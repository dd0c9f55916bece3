// ABOUTME: Category document: a named grouping of recipes
// ABOUTME: Name is unique case-insensitively; description and image are optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::{Collection, Document};
use serde::{Deserialize, Serialize};

/// A recipe category such as "Italian" or "Desserts"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Sequential identifier
    pub id: u64,
    /// Capitalized-per-word name, unique case-insensitively
    pub name: String,
    /// Sentence-cased description; `Some("")` once explicitly cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Document for Category {
    const COLLECTION: Collection = Collection::Categories;
    const PUBLIC_FIELDS: &'static [&'static str] = &["id", "name", "image", "description"];

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
