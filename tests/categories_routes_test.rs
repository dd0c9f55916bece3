// ABOUTME: Integration tests for the category route handlers
// ABOUTME: Covers normalization, uniqueness, partial updates and the delete integrity guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::{http::StatusCode, Router};
use common::create_test_app;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn create_category(app: &Router, body: Value) -> Value {
    let response = AxumTestRequest::post("/admin/categories")
        .json(&body)
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);
    let json: Value = response.json();
    json["data"].clone()
}

async fn create_ingredient(app: &Router, name: &str) -> u64 {
    let response = AxumTestRequest::post("/admin/ingredients")
        .json(&json!({ "name": name }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);
    let json: Value = response.json();
    json["data"]["id"].as_u64().unwrap()
}

async fn create_recipe(app: &Router, name: &str, category: u64, ingredient: u64) -> u64 {
    let response = AxumTestRequest::post("/admin/recipes")
        .json(&json!({
            "name": name,
            "ingredients": [{"ingredient": ingredient, "quantity": 1, "unit": "g"}],
            "instructions": ["Mix everything."],
            "category": category,
            "image": "https://example.com/images/dish.jpg"
        }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);
    let json: Value = response.json();
    json["data"]["id"].as_u64().unwrap()
}

#[tokio::test]
async fn test_create_category_normalizes_name_and_description() {
    let (app, _resources) = create_test_app().await;

    let data = create_category(
        &app,
        json!({
            "name": "  italian food ",
            "description": "pasta AND pizza.  from italy",
            "image": "https://example.com/images/italian.jpg"
        }),
    )
    .await;

    assert_eq!(data["id"], 1);
    assert_eq!(data["name"], "Italian Food");
    assert_eq!(data["description"], "Pasta and pizza. From italy.");
    assert_eq!(data["image"], "https://example.com/images/italian.jpg");
}

#[tokio::test]
async fn test_create_category_requires_name() {
    let (app, _resources) = create_test_app().await;

    let response = AxumTestRequest::post("/admin/categories")
        .json(&json!({ "description": "No name here" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Field 'name' is required");
}

#[tokio::test]
async fn test_create_category_rejects_invalid_name() {
    let (app, _resources) = create_test_app().await;

    let response = AxumTestRequest::post("/admin/categories")
        .json(&json!({ "name": "Desserts 2" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("name"));
}

#[tokio::test]
async fn test_create_category_rejects_bad_image_url() {
    let (app, _resources) = create_test_app().await;

    AxumTestRequest::post("/admin/categories")
        .json(&json!({ "name": "Desserts", "image": "https://example.com/cake.bmp" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_name_is_case_insensitive() {
    let (app, _resources) = create_test_app().await;
    create_category(&app, json!({ "name": "Desserts" })).await;

    let response = AxumTestRequest::post("/admin/categories")
        .json(&json!({ "name": "desserts" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Category 'Desserts' already exists");
}

#[tokio::test]
async fn test_list_categories_sorted_by_name() {
    let (app, _resources) = create_test_app().await;
    for name in ["thai", "French", "indian"] {
        create_category(&app, json!({ "name": name })).await;
    }

    let response = AxumTestRequest::get("/categories")
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["French", "Indian", "Thai"]);
}

#[tokio::test]
async fn test_get_category_by_id() {
    let (app, _resources) = create_test_app().await;
    create_category(&app, json!({ "name": "Mexican" })).await;

    let response = AxumTestRequest::get("/categories/1")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Mexican");

    let response = AxumTestRequest::get("/categories/007")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Category: '7' not found");
}

#[tokio::test]
async fn test_invalid_identifiers_are_rejected() {
    let (app, _resources) = create_test_app().await;

    for raw in ["0", "-1", "abc", "1.5"] {
        let response = AxumTestRequest::get(&format!("/categories/{raw}"))
            .send(app.clone())
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], format!("Invalid ID '{raw}'"));
    }
}

#[tokio::test]
async fn test_update_with_empty_description_clears_only_description() {
    let (app, _resources) = create_test_app().await;
    create_category(
        &app,
        json!({
            "name": "Italian",
            "description": "Pasta and pizza.",
            "image": "https://example.com/images/italian.jpg"
        }),
    )
    .await;

    let response = AxumTestRequest::put("/admin/categories/1")
        .json(&json!({ "description": "" }))
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["data"]["description"], "");
    assert_eq!(body["data"]["name"], "Italian");
    assert_eq!(body["data"]["image"], "https://example.com/images/italian.jpg");
}

#[tokio::test]
async fn test_update_name_uniqueness_excludes_self() {
    let (app, _resources) = create_test_app().await;
    create_category(&app, json!({ "name": "Italian" })).await;
    create_category(&app, json!({ "name": "French" })).await;

    AxumTestRequest::put("/admin/categories/1")
        .json(&json!({ "name": "ITALIAN" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    let response = AxumTestRequest::put("/admin/categories/1")
        .json(&json!({ "name": "french" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "'French' matches an existing category name!");
}

#[tokio::test]
async fn test_update_missing_category_is_not_found() {
    let (app, _resources) = create_test_app().await;

    AxumTestRequest::put("/admin/categories/42")
        .json(&json!({ "name": "Nowhere" }))
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_format() {
    let (app, _resources) = create_test_app().await;

    let response = AxumTestRequest::post("/admin/categories")
        .raw_json("{\"name\": ")
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));

    AxumTestRequest::post("/admin/categories")
        .json(&json!({ "name": 42 }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_referenced_category_fails_until_recipes_are_gone() {
    let (app, _resources) = create_test_app().await;
    let category = create_category(&app, json!({ "name": "Italian" })).await;
    let category_id = category["id"].as_u64().unwrap();
    let garlic = create_ingredient(&app, "garlic").await;
    let first = create_recipe(&app, "Garlic Bread", category_id, garlic).await;
    let second = create_recipe(&app, "Garlic Pasta", category_id, garlic).await;

    let response = AxumTestRequest::delete(&format!("/admin/categories/{category_id}"))
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Category '1' is used in 2 recipes.");

    for recipe in [first, second] {
        AxumTestRequest::delete(&format!("/admin/recipes/{recipe}"))
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK);
    }

    let response = AxumTestRequest::delete(&format!("/admin/categories/{category_id}"))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true, "count": 1 }));

    AxumTestRequest::get(&format!("/categories/{category_id}"))
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (app, _resources) = create_test_app().await;
    create_category(&app, json!({ "name": "First" })).await;
    let second = create_category(&app, json!({ "name": "Second" })).await;
    assert_eq!(second["id"], 2);

    AxumTestRequest::delete("/admin/categories/2")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    let third = create_category(&app, json!({ "name": "Third" })).await;
    assert_eq!(third["id"], 3);
}

#[tokio::test]
async fn test_routes_are_mounted_under_api_prefix() {
    let (app, _resources) = create_test_app().await;

    AxumTestRequest::post("/api/v1/admin/categories")
        .json(&json!({ "name": "Japanese" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);

    let response = AxumTestRequest::get("/api/v1/categories/1")
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Japanese");
}

#[tokio::test]
async fn test_description_of_only_dots_is_stored_empty() {
    let (app, _resources) = create_test_app().await;
    let created = create_category(&app, json!({ "name": "Thai", "description": "..." })).await;
    assert!(created.get("description").is_none());

    let response = AxumTestRequest::put("/admin/categories/1")
        .json(&json!({ "description": "Spicy. Fresh." }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["description"], "Spicy. Fresh.");

    let response = AxumTestRequest::put("/admin/categories/1")
        .json(&json!({ "description": "..." }))
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["description"], "");
}
