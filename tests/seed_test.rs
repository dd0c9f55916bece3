// ABOUTME: Integration tests for the sample catalog seeder
// ABOUTME: Checks inserted counts, resolved references and idempotent re-runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::create_test_store;
use recipe_catalog::database::{DocumentStore, Filter, SortOrder};
use recipe_catalog::integrity::count_references;
use recipe_catalog::models::{Collection, Recipe};
use recipe_catalog::seed::seed_catalog;

#[tokio::test]
async fn test_seed_populates_every_collection() {
    let store = create_test_store().await;

    let report = seed_catalog(&store).await.unwrap();

    assert!(report.categories > 0);
    assert!(report.ingredients > 0);
    assert!(report.recipes > 0);
    assert_eq!(report.skipped, 0);

    let recipes = store
        .find_all(Collection::Recipes, SortOrder::IdAsc)
        .await
        .unwrap();
    assert_eq!(recipes.len(), report.recipes);

    for document in recipes {
        let recipe: Recipe = serde_json::from_value(document).unwrap();
        assert_eq!(
            store
                .count(Collection::Categories, &Filter::Id(recipe.category))
                .await
                .unwrap(),
            1,
            "recipe {} has a dangling category",
            recipe.name
        );
        for id in recipe.referenced_ingredients() {
            assert_eq!(
                store
                    .count(Collection::Ingredients, &Filter::Id(id))
                    .await
                    .unwrap(),
                1,
                "recipe {} has a dangling ingredient",
                recipe.name
            );
        }
    }
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = create_test_store().await;

    let first = seed_catalog(&store).await.unwrap();
    let second = seed_catalog(&store).await.unwrap();

    assert_eq!(second.inserted(), 0);
    assert_eq!(second.skipped, first.inserted());

    let categories = store
        .count(Collection::Categories, &Filter::All)
        .await
        .unwrap();
    assert_eq!(categories, first.categories as u64);
}

#[tokio::test]
async fn test_seeded_names_are_canonical() {
    let store = create_test_store().await;
    seed_catalog(&store).await.unwrap();

    let olive_oil = store
        .find_one(
            Collection::Ingredients,
            &Filter::name_ignore_case("olive oil", None),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(olive_oil["name"], "Olive Oil");

    let id = olive_oil["id"].as_u64().unwrap();
    let references = count_references(&store, Collection::Ingredients, id)
        .await
        .unwrap();
    let total = store.count(Collection::Recipes, &Filter::All).await.unwrap();
    assert!(references <= total);
}
