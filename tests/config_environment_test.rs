// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_catalog::config::{Environment, ServerConfig};
use recipe_catalog::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const VARS: [&str; 6] = [
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_vars();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 5000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.database.url, "sqlite:./data/recipes.db");
    assert_eq!(config.cors_allowed_origins, vec!["*"]);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_vars();
    env::set_var("HTTP_PORT", "8088");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("DATABASE_MAX_CONNECTIONS", "3");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://a.example,https://b.example");

    let config = ServerConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(config.bind_address(), "127.0.0.1:8088");
    assert!(config.environment.is_production());
    assert_eq!(config.database.url, "sqlite::memory:");
    assert_eq!(config.database.max_connections, 3);
    assert_eq!(
        config.cors_allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_vars();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_vars();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
}
