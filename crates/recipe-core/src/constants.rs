// ABOUTME: Constants for the recipe catalog organized by domain
// ABOUTME: Allowed character-set patterns, collection names and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Constants module

/// Regular expressions applied by the text sanitizer
pub mod patterns {
    /// Category and ingredient names: letters and whitespace
    pub const NAME: &str = r"^[A-Za-z\s]+$";
    /// Descriptions, recipe names and instructions
    pub const DESCRIPTION: &str = r"^[A-Za-z0-9'\-,. ]+$";
    /// Measurement units: letters only
    pub const UNIT: &str = r"^[A-Za-z]+$";
    /// Image URLs with an allowed extension (matched case-insensitively)
    pub const IMAGE_URL: &str = r"(?i)^https?://.*\.(png|jpg|jpeg|gif|svg|webp)$";
}

/// Store collection names
pub mod collections {
    /// Categories collection
    pub const CATEGORIES: &str = "categories";
    /// Ingredients collection
    pub const INGREDIENTS: &str = "ingredients";
    /// Recipes collection
    pub const RECIPES: &str = "recipes";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP server
    pub const RECIPE_CATALOG: &str = "recipe-catalog";
}

/// Defaults for environment-driven configuration
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Default size of the connection pool
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Prefix under which the catalog routes are also mounted
    pub const API_PREFIX: &str = "/api/v1";
}
