// ABOUTME: Configuration module for the recipe catalog server
// ABOUTME: Re-exports environment-driven server and database settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Configuration module

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseConfig, Environment, ServerConfig};
