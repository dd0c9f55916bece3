// ABOUTME: Sample data seeding utility for the recipe catalog
// ABOUTME: Loads categories, ingredients and recipes, skipping names that already exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed the database named by DATABASE_URL
//! cargo run --bin seed-catalog
//!
//! # Override database URL
//! cargo run --bin seed-catalog -- --database-url sqlite:./data/recipes.db
//!
//! # Verbose output
//! cargo run --bin seed-catalog -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use recipe_catalog::config::ServerConfig;
use recipe_catalog::database::{DocumentStore, SqliteStore};
use recipe_catalog::seed::seed_catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seed-catalog",
    about = "Recipe Catalog Seeder",
    long_about = "Load the sample categories, ingredients and recipes into the catalog database"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .init();

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    info!("Seeding catalog into {}", config.database.url);
    let store = SqliteStore::connect(&config.database.url, config.database.max_connections).await?;
    let report = seed_catalog(&store).await?;
    store.close().await;

    info!(
        "Inserted {} records ({} categories, {} ingredients, {} recipes), skipped {}",
        report.inserted(),
        report.categories,
        report.ingredients,
        report.recipes,
        report.skipped
    );
    Ok(())
}
