// ABOUTME: Route handlers for the category endpoints of the catalog API
// ABOUTME: List, get, create, update and delete categories with uniqueness and integrity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Category routes
//!
//! Public reads live under `/categories`, writes under `/admin/categories`.

use super::common::{count_response, data_response, json_body, list_response};
use crate::integrity::{assert_not_referenced, exists_matching};
use crate::projection::project;
use crate::resources::ServerResources;
use crate::validation::{
    normalize_name, optional_description, optional_image, parse_id, required_text,
    updated_description, updated_image,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post, put},
    Json, Router,
};
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Category, Collection, Document};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Body of `POST /admin/categories`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoryBody {
    /// Required name
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Optional image URL
    pub image: Option<String>,
}

/// Body of `PUT /admin/categories/{id}`; only present fields are applied
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCategoryBody {
    /// New name
    pub name: Option<String>,
    /// New description, `""` clears it
    pub description: Option<String>,
    /// New image URL, `""` clears it
    pub image: Option<String>,
}

/// Category routes implementation
pub struct CategoryRoutes;

impl CategoryRoutes {
    /// Create all category routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/categories", get(Self::handle_list))
            .route("/categories/:id", get(Self::handle_get))
            .route("/admin/categories", post(Self::handle_create))
            .route("/admin/categories/:id", put(Self::handle_update))
            .route("/admin/categories/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn load(resources: &ServerResources, raw_id: &str) -> AppResult<Category> {
        let id = parse_id(raw_id)?;
        resources
            .categories()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category: '{id}'")))
    }

    fn to_public(category: &Category) -> AppResult<serde_json::Value> {
        Ok(project(&serde_json::to_value(category)?, Category::PUBLIC_FIELDS))
    }

    /// Handle GET /categories - list all categories sorted by name
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let categories = resources.categories().list().await?;
        let data = project(&serde_json::to_value(&categories)?, Category::PUBLIC_FIELDS);
        Ok(list_response(data))
    }

    /// Handle GET /categories/:id - fetch one category
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let category = Self::load(&resources, &id).await?;
        Ok(data_response(StatusCode::OK, Self::to_public(&category)?))
    }

    /// Handle POST /admin/categories - create a category
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<CreateCategoryBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let body = json_body(payload)?;

        let name = normalize_name(&required_text(body.name, "name")?, "name")?;
        let description = optional_description(body.description)?;
        let image = optional_image(body.image)?;

        if exists_matching(resources.store.as_ref(), Collection::Categories, &name, None).await? {
            return Err(AppError::duplicate_name(format!(
                "Category '{name}' already exists"
            )));
        }

        let category = resources
            .categories()
            .insert(&Category {
                id: 0,
                name,
                description,
                image,
            })
            .await?;

        info!(category.id = category.id, category.name = %category.name, "Category created");
        Ok(data_response(StatusCode::CREATED, Self::to_public(&category)?))
    }

    /// Handle PUT /admin/categories/:id - update the fields present in the body
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<UpdateCategoryBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let mut category = Self::load(&resources, &id).await?;
        let body = json_body(payload)?;

        if let Some(raw_name) = body.name {
            let name = normalize_name(&required_text(Some(raw_name), "name")?, "name")?;
            if exists_matching(
                resources.store.as_ref(),
                Collection::Categories,
                &name,
                Some(category.id),
            )
            .await?
            {
                return Err(AppError::duplicate_name(format!(
                    "'{name}' matches an existing category name!"
                )));
            }
            category.name = name;
        }
        if let Some(description) = body.description {
            category.description = Some(updated_description(&description)?);
        }
        if let Some(image) = body.image {
            category.image = Some(updated_image(&image)?);
        }

        if !resources.categories().save(&category).await? {
            return Err(AppError::not_found(format!("Category: '{}'", category.id)));
        }

        info!(category.id = category.id, "Category updated");
        Ok(data_response(StatusCode::OK, Self::to_public(&category)?))
    }

    /// Handle DELETE /admin/categories/:id - delete an unreferenced category
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let category = Self::load(&resources, &id).await?;
        assert_not_referenced(resources.store.as_ref(), Collection::Categories, category.id)
            .await?;

        let deleted = resources.categories().delete(category.id).await?;
        info!(category.id = category.id, deleted, "Category deleted");
        Ok(count_response(deleted))
    }
}
