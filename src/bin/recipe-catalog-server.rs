// ABOUTME: Recipe catalog HTTP server binary
// ABOUTME: Loads configuration, opens the document store and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Recipe Catalog Server Binary
//!
//! ```bash
//! cargo run --bin recipe-catalog-server -- --http-port 8080 --database-url sqlite::memory:
//! ```

use anyhow::Result;
use clap::Parser;
use recipe_catalog::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe Catalog API - categories, ingredients and recipes over REST")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::open(config).await?);
    info!("Document store opened");

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
