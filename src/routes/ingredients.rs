// ABOUTME: Route handlers for the ingredient endpoints of the catalog API
// ABOUTME: List, get, create, update and delete ingredients with uniqueness and integrity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Ingredient routes

use super::common::{count_response, data_response, json_body, list_response};
use crate::integrity::{assert_not_referenced, exists_matching};
use crate::projection::project;
use crate::resources::ServerResources;
use crate::validation::{normalize_name, optional_image, parse_id, required_text, updated_image};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post, put},
    Json, Router,
};
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Collection, Document, Ingredient};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Body of `POST /admin/ingredients` and `PUT /admin/ingredients/{id}`
///
/// On update only the fields present are applied; `image: ""` clears the image.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IngredientBody {
    /// Name, required on create
    pub name: Option<String>,
    /// Image URL
    pub image: Option<String>,
}

/// Ingredient routes implementation
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ingredients", get(Self::handle_list))
            .route("/ingredients/:id", get(Self::handle_get))
            .route("/admin/ingredients", post(Self::handle_create))
            .route("/admin/ingredients/:id", put(Self::handle_update))
            .route("/admin/ingredients/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn load(resources: &ServerResources, raw_id: &str) -> AppResult<Ingredient> {
        let id = parse_id(raw_id)?;
        resources
            .ingredients()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Ingredient: '{id}'")))
    }

    fn to_public(ingredient: &Ingredient) -> AppResult<serde_json::Value> {
        Ok(project(&serde_json::to_value(ingredient)?, Ingredient::PUBLIC_FIELDS))
    }

    /// Handle GET /ingredients - list all ingredients sorted by name
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let ingredients = resources.ingredients().list().await?;
        let data = project(&serde_json::to_value(&ingredients)?, Ingredient::PUBLIC_FIELDS);
        Ok(list_response(data))
    }

    /// Handle GET /ingredients/:id - fetch one ingredient
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let ingredient = Self::load(&resources, &id).await?;
        Ok(data_response(StatusCode::OK, Self::to_public(&ingredient)?))
    }

    /// Handle POST /admin/ingredients - create an ingredient
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<IngredientBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let body = json_body(payload)?;

        let name = normalize_name(&required_text(body.name, "name")?, "name")?;
        let image = optional_image(body.image)?;

        if exists_matching(resources.store.as_ref(), Collection::Ingredients, &name, None).await? {
            return Err(AppError::duplicate_name(format!(
                "Ingredient '{name}' already exists"
            )));
        }

        let ingredient = resources
            .ingredients()
            .insert(&Ingredient { id: 0, name, image })
            .await?;

        info!(ingredient.id = ingredient.id, ingredient.name = %ingredient.name, "Ingredient created");
        Ok(data_response(StatusCode::CREATED, Self::to_public(&ingredient)?))
    }

    /// Handle PUT /admin/ingredients/:id - update the fields present in the body
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<IngredientBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let mut ingredient = Self::load(&resources, &id).await?;
        let body = json_body(payload)?;

        if let Some(raw_name) = body.name {
            let name = normalize_name(&required_text(Some(raw_name), "name")?, "name")?;
            if exists_matching(
                resources.store.as_ref(),
                Collection::Ingredients,
                &name,
                Some(ingredient.id),
            )
            .await?
            {
                return Err(AppError::duplicate_name(format!(
                    "'{name}' matches an existing ingredient name!"
                )));
            }
            ingredient.name = name;
        }
        if let Some(image) = body.image {
            ingredient.image = Some(updated_image(&image)?);
        }

        if !resources.ingredients().save(&ingredient).await? {
            return Err(AppError::not_found(format!("Ingredient: '{}'", ingredient.id)));
        }

        info!(ingredient.id = ingredient.id, "Ingredient updated");
        Ok(data_response(StatusCode::OK, Self::to_public(&ingredient)?))
    }

    /// Handle DELETE /admin/ingredients/:id - delete an ingredient no recipe uses
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let ingredient = Self::load(&resources, &id).await?;
        assert_not_referenced(
            resources.store.as_ref(),
            Collection::Ingredients,
            ingredient.id,
        )
        .await?;

        let deleted = resources.ingredients().delete(ingredient.id).await?;
        info!(ingredient.id = ingredient.id, deleted, "Ingredient deleted");
        Ok(count_response(deleted))
    }
}
