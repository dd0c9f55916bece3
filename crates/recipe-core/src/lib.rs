// ABOUTME: Core types and constants for the recipe catalog API
// ABOUTME: Foundation crate with error handling, domain models and validation constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! catalog service. It changes infrequently so the server crate can be
//! rebuilt incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Category, Ingredient and Recipe documents
//! - **constants**: Character-set patterns and collection names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Catalog data models (Category, Ingredient, Recipe)
pub mod models;
