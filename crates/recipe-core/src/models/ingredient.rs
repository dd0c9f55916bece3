// ABOUTME: Ingredient document referenced by recipe ingredient lines
// ABOUTME: Name is unique case-insensitively; image is optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::{Collection, Document};
use serde::{Deserialize, Serialize};

/// A single ingredient that recipes reference by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Sequential identifier
    pub id: u64,
    /// Capitalized-per-word name, unique case-insensitively
    pub name: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Document for Ingredient {
    const COLLECTION: Collection = Collection::Ingredients;
    const PUBLIC_FIELDS: &'static [&'static str] = &["id", "name", "image"];

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
