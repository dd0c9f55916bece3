// ABOUTME: Route handlers for the recipe endpoints of the catalog API
// ABOUTME: Validates ingredient lines, instructions and references before persisting recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Recipe routes
//!
//! Recipes reference one category and any number of ingredients by id.
//! Both kinds of reference are checked for existence on create and update;
//! deleting a recipe never touches what it references.

use super::common::{count_response, data_response, json_body, list_response};
use crate::database::DocumentStore;
use crate::integrity::{assert_exists, exists_matching};
use crate::projection::{ingredient_names, project_recipe, project_recipes};
use crate::resources::ServerResources;
use crate::validation::{
    normalize_description, normalize_title, parse_id, required_text, sanitize_unit,
    validate_image_url,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post, put},
    Json, Router,
};
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Collection, IngredientQuantity, Recipe};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// One ingredient line as submitted by a client
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IngredientLineBody {
    /// Referenced ingredient id
    pub ingredient: Option<u64>,
    /// Amount, must be zero or greater
    pub quantity: Option<f64>,
    /// Measurement unit, letters only
    pub unit: Option<String>,
}

/// Body of `POST /admin/recipes` and `PUT /admin/recipes/{id}`
///
/// On create every field except `alternatives` is required. On update only
/// the fields present are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecipeBody {
    /// Recipe name
    pub name: Option<String>,
    /// Required ingredient lines, non-empty
    pub ingredients: Option<Vec<IngredientLineBody>>,
    /// Substitute ingredient lines, may be empty
    pub alternatives: Option<Vec<IngredientLineBody>>,
    /// Preparation steps, non-empty
    pub instructions: Option<Vec<String>>,
    /// Owning category id
    pub category: Option<u64>,
    /// Image URL
    pub image: Option<String>,
}

fn non_empty<T>(value: Option<Vec<T>>, field: &str) -> AppResult<Vec<T>> {
    match value {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(AppError::missing_field(format!(
            "Field '{field}' must be a non-empty list"
        ))),
    }
}

fn normalize_line(line: IngredientLineBody, field: &str) -> AppResult<IngredientQuantity> {
    let ingredient = line
        .ingredient
        .ok_or_else(|| AppError::missing_field(format!("Field '{field}.ingredient' is required")))?;
    let quantity = line
        .quantity
        .ok_or_else(|| AppError::missing_field(format!("Field '{field}.quantity' is required")))?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(AppError::invalid_format(format!(
            "{field}.quantity must be zero or greater"
        )));
    }
    let unit_field = format!("{field}.unit");
    let unit = sanitize_unit(&required_text(line.unit, &unit_field)?, &unit_field)?.to_owned();

    Ok(IngredientQuantity {
        ingredient,
        quantity,
        unit,
    })
}

fn normalize_lines(
    lines: Vec<IngredientLineBody>,
    field: &str,
) -> AppResult<Vec<IngredientQuantity>> {
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| normalize_line(line, &format!("{field}[{index}]")))
        .collect()
}

fn normalize_instructions(instructions: Vec<String>) -> AppResult<Vec<String>> {
    instructions
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let field = format!("instructions[{index}]");
            let step = normalize_description(step, &field)?;
            if step.is_empty() {
                return Err(AppError::invalid_format(format!("{field} must contain text")));
            }
            Ok(step)
        })
        .collect()
}

fn normalize_image(raw: Option<String>) -> AppResult<String> {
    let image = required_text(raw, "image")?;
    Ok(validate_image_url(&image, "image")?.to_owned())
}

/// Fail with `InvalidReference` unless the category and every ingredient exist
async fn check_references(store: &dyn DocumentStore, recipe: &Recipe) -> AppResult<()> {
    assert_exists(store, Collection::Categories, recipe.category).await?;
    for id in recipe.referenced_ingredients() {
        assert_exists(store, Collection::Ingredients, id).await?;
    }
    Ok(())
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes", get(Self::handle_list))
            .route("/recipes/:id", get(Self::handle_get))
            .route("/admin/recipes", post(Self::handle_create))
            .route("/admin/recipes/:id", put(Self::handle_update))
            .route("/admin/recipes/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn load(resources: &ServerResources, raw_id: &str) -> AppResult<Recipe> {
        let id = parse_id(raw_id)?;
        resources
            .recipes()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe: '{id}'")))
    }

    async fn to_public(resources: &ServerResources, recipe: &Recipe) -> AppResult<serde_json::Value> {
        let names = ingredient_names(resources.store.as_ref()).await?;
        Ok(project_recipe(&serde_json::to_value(recipe)?, &names))
    }

    /// Handle GET /recipes - list all recipes sorted by name
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes().list().await?;
        let names = ingredient_names(resources.store.as_ref()).await?;
        let documents = recipes
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(list_response(project_recipes(&documents, &names)))
    }

    /// Handle GET /recipes/:id - fetch one recipe with ingredient names
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = Self::load(&resources, &id).await?;
        Ok(data_response(
            StatusCode::OK,
            Self::to_public(&resources, &recipe).await?,
        ))
    }

    /// Handle POST /admin/recipes - create a recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RecipeBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let body = json_body(payload)?;

        let name = required_text(body.name, "name")?;
        let ingredients = non_empty(body.ingredients, "ingredients")?;
        let instructions = non_empty(body.instructions, "instructions")?;
        let category = body
            .category
            .ok_or_else(|| AppError::missing_field("Field 'category' is required"))?;
        let image = normalize_image(body.image)?;

        let candidate = Recipe {
            id: 0,
            name: normalize_title(&name, "name")?,
            ingredients: normalize_lines(ingredients, "ingredients")?,
            alternatives: normalize_lines(body.alternatives.unwrap_or_default(), "alternatives")?,
            instructions: normalize_instructions(instructions)?,
            category,
            image,
        };

        if exists_matching(
            resources.store.as_ref(),
            Collection::Recipes,
            &candidate.name,
            None,
        )
        .await?
        {
            return Err(AppError::duplicate_name(format!(
                "Recipe '{}' already exists",
                candidate.name
            )));
        }
        check_references(resources.store.as_ref(), &candidate).await?;

        let recipe = resources.recipes().insert(&candidate).await?;
        info!(recipe.id = recipe.id, recipe.name = %recipe.name, "Recipe created");
        Ok(data_response(
            StatusCode::CREATED,
            Self::to_public(&resources, &recipe).await?,
        ))
    }

    /// Handle PUT /admin/recipes/:id - update the fields present in the body
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<RecipeBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let mut recipe = Self::load(&resources, &id).await?;
        let body = json_body(payload)?;
        let references_changed =
            body.ingredients.is_some() || body.alternatives.is_some() || body.category.is_some();

        if let Some(raw_name) = body.name {
            let name = normalize_title(&required_text(Some(raw_name), "name")?, "name")?;
            if exists_matching(
                resources.store.as_ref(),
                Collection::Recipes,
                &name,
                Some(recipe.id),
            )
            .await?
            {
                return Err(AppError::duplicate_name(format!(
                    "'{name}' matches an existing recipe name!"
                )));
            }
            recipe.name = name;
        }
        if body.ingredients.is_some() {
            recipe.ingredients =
                normalize_lines(non_empty(body.ingredients, "ingredients")?, "ingredients")?;
        }
        if let Some(alternatives) = body.alternatives {
            recipe.alternatives = normalize_lines(alternatives, "alternatives")?;
        }
        if body.instructions.is_some() {
            recipe.instructions =
                normalize_instructions(non_empty(body.instructions, "instructions")?)?;
        }
        if let Some(category) = body.category {
            recipe.category = category;
        }
        if body.image.is_some() {
            recipe.image = normalize_image(body.image)?;
        }

        if references_changed {
            check_references(resources.store.as_ref(), &recipe).await?;
        }

        if !resources.recipes().save(&recipe).await? {
            return Err(AppError::not_found(format!("Recipe: '{}'", recipe.id)));
        }

        info!(recipe.id = recipe.id, "Recipe updated");
        Ok(data_response(
            StatusCode::OK,
            Self::to_public(&resources, &recipe).await?,
        ))
    }

    /// Handle DELETE /admin/recipes/:id - delete a recipe
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = Self::load(&resources, &id).await?;
        let deleted = resources.recipes().delete(recipe.id).await?;
        info!(recipe.id = recipe.id, deleted, "Recipe deleted");
        Ok(count_response(deleted))
    }
}
