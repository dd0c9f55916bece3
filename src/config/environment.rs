// ABOUTME: Environment configuration for the recipe catalog server
// ABOUTME: Reads bind address, database location, pool size and CORS origins from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Environment-based configuration management

use anyhow::{Context, Result};
use recipe_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Document store connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `SQLite` URL, e.g. `sqlite:./data/recipes.db` or `sqlite::memory:`
    pub url: String,
    /// Upper bound on pooled connections (in-memory databases always use one)
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DATABASE_URL.to_owned(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// In-memory configuration used by tests
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    pub http_port: u16,
    /// Address the HTTP server binds to
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Document store settings
    pub database: DatabaseConfig,
    /// Allowed CORS origins; `*` allows any
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cors_allowed_origins: vec!["*".to_owned()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", defaults::HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", defaults::DATABASE_URL),
                max_connections: env_var_or(
                    "DATABASE_MAX_CONNECTIONS",
                    &defaults::DATABASE_MAX_CONNECTIONS.to_string(),
                )
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS value")?,
            },
            cors_allowed_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
        };

        info!("Configuration loaded for {} environment", config.environment);
        Ok(config)
    }

    /// Socket address string for the HTTP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Catalog Configuration:\n\
             - Environment: {}\n\
             - Listen: {}\n\
             - Database: {} (max {} connections)\n\
             - CORS Origins: {}",
            self.environment,
            self.bind_address(),
            self.database.url,
            self.database.max_connections,
            self.cors_allowed_origins.join(", "),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated origins, falling back to `*` when none remain
fn parse_origins(origins: &str) -> Vec<String> {
    let parsed: Vec<String> = origins
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect();
    if parsed.is_empty() {
        vec!["*".to_owned()]
    } else {
        parsed
    }
}
