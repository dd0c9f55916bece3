// ABOUTME: Request input validation for path identifiers and free-text fields
// ABOUTME: Parses ids and sanitizes names, descriptions, units and image URLs into canonical form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Validation
//!
//! Everything a handler does to user input before it reaches the store.
//! The functions here are pure; none of them touch the store.

/// Required-field checks and canonical normalization of request fields
pub mod fields;

/// Positive-integer path identifier parsing
pub mod identifier;

/// Character-set checks and canonical casing for free text
pub mod text;

pub use fields::{
    normalize_description, normalize_name, normalize_title, optional_description, optional_image,
    required_text, updated_description, updated_image,
};
pub use identifier::parse_id;
pub use text::{
    capitalize_sentences, capitalize_words, sanitize_as_description, sanitize_as_name,
    sanitize_unit, validate_image_url,
};
