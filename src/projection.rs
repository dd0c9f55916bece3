// ABOUTME: Field projector shaping stored documents into API responses
// ABOUTME: Keeps each type's public fields and expands recipe ingredient lines with names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Field Projection
//!
//! Stored documents may carry more than the API exposes. [`project`] keeps
//! only the requested fields, in the requested order. Recipes additionally
//! get their `ingredients` lines expanded to
//! `{name, ingredient, quantity, unit}` via [`project_recipes`].

use crate::database::{DocumentStore, SortOrder};
use recipe_core::errors::AppResult;
use recipe_core::models::{Collection, Document, Recipe};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Ingredient id to display name
pub type IngredientNames = HashMap<u64, String>;

/// Keep only `fields` of a record, or of every record in a list
///
/// A list stays a list in the same order; a single object stays a single
/// object. Fields missing from a record are omitted rather than nulled.
#[must_use]
pub fn project(value: &Value, fields: &[&str]) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| project_one(item, fields)).collect())
        }
        other => project_one(other, fields),
    }
}

fn project_one(record: &Value, fields: &[&str]) -> Value {
    let Value::Object(source) = record else {
        return record.clone();
    };

    let mut projected = Map::new();
    for field in fields {
        if let Some(value) = source.get(*field) {
            projected.insert((*field).to_owned(), value.clone());
        }
    }
    Value::Object(projected)
}

/// Project a recipe and expand its `ingredients` lines with ingredient names
#[must_use]
pub fn project_recipe(recipe: &Value, names: &IngredientNames) -> Value {
    let mut projected = project_one(recipe, Recipe::PUBLIC_FIELDS);
    if let Some(Value::Array(lines)) = projected.get_mut("ingredients") {
        for line in lines.iter_mut() {
            *line = expand_line(line, names);
        }
    }
    projected
}

/// Project a list of recipes, preserving order
#[must_use]
pub fn project_recipes(recipes: &[Value], names: &IngredientNames) -> Value {
    Value::Array(
        recipes
            .iter()
            .map(|recipe| project_recipe(recipe, names))
            .collect(),
    )
}

fn expand_line(line: &Value, names: &IngredientNames) -> Value {
    let name = line
        .get("ingredient")
        .and_then(Value::as_u64)
        .and_then(|id| names.get(&id))
        .map_or("", String::as_str);

    let mut expanded = Map::new();
    expanded.insert("name".to_owned(), Value::from(name));
    for field in ["ingredient", "quantity", "unit"] {
        expanded.insert(
            field.to_owned(),
            line.get(field).cloned().unwrap_or(Value::Null),
        );
    }
    Value::Object(expanded)
}

/// Load the name of every stored ingredient, keyed by id
pub async fn ingredient_names(store: &dyn DocumentStore) -> AppResult<IngredientNames> {
    let ingredients = store
        .find_all(Collection::Ingredients, SortOrder::IdAsc)
        .await?;

    Ok(ingredients
        .iter()
        .filter_map(|ingredient| {
            let id = ingredient.get("id")?.as_u64()?;
            let name = ingredient.get("name")?.as_str()?;
            Some((id, name.to_owned()))
        })
        .collect())
}
