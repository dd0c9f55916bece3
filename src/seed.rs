// ABOUTME: Sample catalog data and the loader that pushes it through the normalization pipeline
// ABOUTME: Seeds categories, ingredients and recipes, skipping names that already exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Catalog Seeding
//!
//! Seed recipes refer to their category and ingredients by name; the names
//! are resolved to the ids the store assigned when those records were
//! seeded. Every record goes through the same sanitizers the API uses, so
//! seeded text is canonical.

use crate::database::{DocumentStore, Filter};
use crate::integrity::exists_matching;
use crate::validation::{
    normalize_description, normalize_name, normalize_title, optional_image, sanitize_unit,
    validate_image_url,
};
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Category, Collection, Document, Ingredient, IngredientQuantity, Recipe};
use tracing::{debug, info};

struct SeedCategory {
    name: &'static str,
    description: &'static str,
    image: &'static str,
}

struct SeedIngredient {
    name: &'static str,
    image: &'static str,
}

struct SeedLine {
    ingredient: &'static str,
    quantity: f64,
    unit: &'static str,
}

struct SeedRecipe {
    name: &'static str,
    category: &'static str,
    ingredients: &'static [SeedLine],
    alternatives: &'static [SeedLine],
    instructions: &'static [&'static str],
    image: &'static str,
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Italian",
        description: "Traditional Italian cuisine featuring pasta, pizza, and Mediterranean flavors.",
        image: "https://example.com/images/italian.jpg",
    },
    SeedCategory {
        name: "Mexican",
        description: "Bold and spicy Mexican dishes with corn, beans, and chili peppers.",
        image: "https://example.com/images/mexican.jpg",
    },
    SeedCategory {
        name: "Indian",
        description: "Aromatic Indian cuisine with diverse spices, curries, and flatbreads.",
        image: "https://example.com/images/indian.jpg",
    },
    SeedCategory {
        name: "Chinese",
        description: "Traditional Chinese recipes featuring stir-fry techniques and balanced flavors.",
        image: "https://example.com/images/chinese.jpg",
    },
    SeedCategory {
        name: "Japanese",
        description: "Elegant Japanese cuisine emphasizing fresh ingredients and precise preparation.",
        image: "https://example.com/images/japanese.jpg",
    },
    SeedCategory {
        name: "Thai",
        description: "Vibrant Thai food balancing sweet, sour, salty, and spicy flavors.",
        image: "https://example.com/images/thai.jpg",
    },
    SeedCategory {
        name: "Mediterranean",
        description: "Healthy Mediterranean diet with olive oil, fresh vegetables, and lean proteins.",
        image: "https://example.com/images/mediterranean.jpg",
    },
    SeedCategory {
        name: "French",
        description: "Sophisticated French cuisine known for rich sauces and classic techniques.",
        image: "https://example.com/images/french.jpg",
    },
];

const INGREDIENTS: &[SeedIngredient] = &[
    SeedIngredient { name: "Salt", image: "https://example.com/images/salt.jpg" },
    SeedIngredient { name: "Pepper", image: "https://example.com/images/pepper.jpg" },
    SeedIngredient { name: "Olive Oil", image: "https://example.com/images/olive-oil.jpg" },
    SeedIngredient { name: "Garlic", image: "https://example.com/images/garlic.jpg" },
    SeedIngredient { name: "Onion", image: "https://example.com/images/onion.jpg" },
    SeedIngredient { name: "Tomato", image: "https://example.com/images/tomato.jpg" },
    SeedIngredient { name: "Basil", image: "https://example.com/images/basil.jpg" },
    SeedIngredient { name: "Oregano", image: "https://example.com/images/oregano.jpg" },
    SeedIngredient { name: "Flour", image: "https://example.com/images/flour.jpg" },
    SeedIngredient { name: "Sugar", image: "https://example.com/images/sugar.jpg" },
    SeedIngredient { name: "Egg", image: "https://example.com/images/egg.jpg" },
    SeedIngredient { name: "Milk", image: "https://example.com/images/milk.jpg" },
    SeedIngredient { name: "Butter", image: "https://example.com/images/butter.jpg" },
    SeedIngredient { name: "Chicken", image: "https://example.com/images/chicken.jpg" },
    SeedIngredient { name: "Beef", image: "https://example.com/images/beef.jpg" },
    SeedIngredient { name: "Rice", image: "https://example.com/images/rice.jpg" },
    SeedIngredient { name: "Pasta", image: "https://example.com/images/pasta.jpg" },
    SeedIngredient { name: "Cheese", image: "https://example.com/images/cheese.jpg" },
];

const RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Spaghetti Carbonara",
        category: "Italian",
        ingredients: &[
            SeedLine { ingredient: "Pasta", quantity: 200.0, unit: "g" },
            SeedLine { ingredient: "Egg", quantity: 3.0, unit: "whole" },
            SeedLine { ingredient: "Cheese", quantity: 50.0, unit: "g" },
            SeedLine { ingredient: "Salt", quantity: 1.0, unit: "tsp" },
            SeedLine { ingredient: "Pepper", quantity: 1.0, unit: "tsp" },
        ],
        alternatives: &[SeedLine { ingredient: "Butter", quantity: 20.0, unit: "g" }],
        instructions: &[
            "Boil pasta according to package instructions.",
            "Whisk eggs and cheese in a bowl.",
            "Drain pasta and immediately mix with egg mixture.",
            "Season with salt and pepper.",
        ],
        image: "https://example.com/images/carbonara.jpg",
    },
    SeedRecipe {
        name: "Chicken Curry",
        category: "Indian",
        ingredients: &[
            SeedLine { ingredient: "Chicken", quantity: 500.0, unit: "g" },
            SeedLine { ingredient: "Onion", quantity: 1.0, unit: "whole" },
            SeedLine { ingredient: "Garlic", quantity: 3.0, unit: "cloves" },
            SeedLine { ingredient: "Salt", quantity: 1.0, unit: "tsp" },
            SeedLine { ingredient: "Pepper", quantity: 1.0, unit: "tsp" },
        ],
        alternatives: &[],
        instructions: &[
            "Saute onion and garlic until fragrant.",
            "Add chicken and cook until browned.",
            "Add spices and simmer for 20 minutes.",
            "Season with salt and pepper to taste.",
        ],
        image: "https://example.com/images/curry.jpg",
    },
    SeedRecipe {
        name: "Tomato Basil Pasta",
        category: "Italian",
        ingredients: &[
            SeedLine { ingredient: "Pasta", quantity: 200.0, unit: "g" },
            SeedLine { ingredient: "Tomato", quantity: 4.0, unit: "whole" },
            SeedLine { ingredient: "Basil", quantity: 10.0, unit: "leaves" },
            SeedLine { ingredient: "Garlic", quantity: 2.0, unit: "cloves" },
            SeedLine { ingredient: "Olive Oil", quantity: 2.0, unit: "tbsp" },
            SeedLine { ingredient: "Salt", quantity: 1.0, unit: "tsp" },
        ],
        alternatives: &[SeedLine { ingredient: "Oregano", quantity: 1.0, unit: "tsp" }],
        instructions: &[
            "Cook pasta according to package instructions.",
            "Saute garlic in olive oil.",
            "Add chopped tomatoes and cook until soft.",
            "Toss in cooked pasta and torn basil leaves.",
            "Season with salt.",
        ],
        image: "https://example.com/images/tomato-basil-pasta.jpg",
    },
];

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Categories inserted
    pub categories: usize,
    /// Ingredients inserted
    pub ingredients: usize,
    /// Recipes inserted
    pub recipes: usize,
    /// Records skipped because their name already existed
    pub skipped: usize,
}

impl SeedReport {
    /// Total number of records inserted
    #[must_use]
    pub const fn inserted(&self) -> usize {
        self.categories + self.ingredients + self.recipes
    }
}

/// Insert `record` unless its name is taken; returns whether it was inserted
async fn insert_if_new<T: Document>(store: &dyn DocumentStore, record: &T) -> AppResult<bool> {
    if exists_matching(store, T::COLLECTION, record.name(), None).await? {
        debug!(collection = %T::COLLECTION, name = record.name(), "Seed record already present");
        return Ok(false);
    }
    store
        .insert(T::COLLECTION, serde_json::to_value(record)?)
        .await?;
    Ok(true)
}

/// Id of the record in `collection` named `name`
async fn resolve_id(store: &dyn DocumentStore, collection: Collection, name: &str) -> AppResult<u64> {
    store
        .find_one(collection, &Filter::name_ignore_case(name, None))
        .await?
        .and_then(|document| document.get("id").and_then(serde_json::Value::as_u64))
        .ok_or_else(|| {
            AppError::invalid_reference(format!(
                "Seed data refers to unknown {} '{name}'",
                collection.label()
            ))
        })
}

async fn resolve_lines(
    store: &dyn DocumentStore,
    lines: &[SeedLine],
    field: &str,
) -> AppResult<Vec<IngredientQuantity>> {
    let mut resolved = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        resolved.push(IngredientQuantity {
            ingredient: resolve_id(store, Collection::Ingredients, line.ingredient).await?,
            quantity: line.quantity,
            unit: sanitize_unit(line.unit, &format!("{field}[{index}].unit"))?.to_owned(),
        });
    }
    Ok(resolved)
}

/// Load the sample catalog into `store`
///
/// Categories and ingredients are seeded before recipes so recipe references
/// resolve. Running it twice inserts nothing the second time.
pub async fn seed_catalog(store: &dyn DocumentStore) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for seed in CATEGORIES {
        let category = Category {
            id: 0,
            name: normalize_name(seed.name, "name")?,
            description: Some(normalize_description(seed.description, "description")?),
            image: optional_image(Some(seed.image.to_owned()))?,
        };
        if insert_if_new(store, &category).await? {
            report.categories += 1;
        } else {
            report.skipped += 1;
        }
    }

    for seed in INGREDIENTS {
        let ingredient = Ingredient {
            id: 0,
            name: normalize_name(seed.name, "name")?,
            image: optional_image(Some(seed.image.to_owned()))?,
        };
        if insert_if_new(store, &ingredient).await? {
            report.ingredients += 1;
        } else {
            report.skipped += 1;
        }
    }

    for seed in RECIPES {
        let instructions = seed
            .instructions
            .iter()
            .enumerate()
            .map(|(index, step)| normalize_description(step, &format!("instructions[{index}]")))
            .collect::<AppResult<Vec<_>>>()?;

        let recipe = Recipe {
            id: 0,
            name: normalize_title(seed.name, "name")?,
            ingredients: resolve_lines(store, seed.ingredients, "ingredients").await?,
            alternatives: resolve_lines(store, seed.alternatives, "alternatives").await?,
            instructions,
            category: resolve_id(store, Collection::Categories, seed.category).await?,
            image: validate_image_url(seed.image, "image")?.to_owned(),
        };
        if insert_if_new(store, &recipe).await? {
            report.recipes += 1;
        } else {
            report.skipped += 1;
        }
    }

    info!(
        categories = report.categories,
        ingredients = report.ingredients,
        recipes = report.recipes,
        skipped = report.skipped,
        "Catalog seeding finished"
    );
    Ok(report)
}
