// ABOUTME: Recipe document with ingredient lines, alternatives and instructions
// ABOUTME: References one category and any number of ingredients by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::{Collection, Document};
use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude below which every whole `f64` is an exact integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole quantities as JSON integers so `2` round-trips as `2`, not `2.0`
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_quantity<S: Serializer>(quantity: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    #[allow(clippy::float_cmp)]
    let whole = quantity.fract() == 0.0 && quantity.abs() <= MAX_EXACT_INTEGER;
    if whole {
        serializer.serialize_i64(*quantity as i64)
    } else {
        serializer.serialize_f64(*quantity)
    }
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    /// Id of the referenced ingredient
    pub ingredient: u64,
    /// Amount, never negative; whole amounts serialize as integers
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: f64,
    /// Measurement unit (letters only)
    pub unit: String,
}

/// A recipe with its ingredient lists, instructions and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Sequential identifier
    pub id: u64,
    /// Capitalized-per-word name, unique case-insensitively
    pub name: String,
    /// Required ingredients, never empty
    pub ingredients: Vec<IngredientQuantity>,
    /// Optional substitutes
    #[serde(default)]
    pub alternatives: Vec<IngredientQuantity>,
    /// Ordered preparation steps, never empty
    pub instructions: Vec<String>,
    /// Id of the owning category
    pub category: u64,
    /// Image URL
    pub image: String,
}

impl Recipe {
    /// Ids of every ingredient referenced from either list, in order of appearance
    #[must_use]
    pub fn referenced_ingredients(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = Vec::new();
        for item in self.ingredients.iter().chain(&self.alternatives) {
            if !ids.contains(&item.ingredient) {
                ids.push(item.ingredient);
            }
        }
        ids
    }
}

impl Document for Recipe {
    const COLLECTION: Collection = Collection::Recipes;
    const PUBLIC_FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "ingredients",
        "alternatives",
        "instructions",
        "category",
        "image",
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
