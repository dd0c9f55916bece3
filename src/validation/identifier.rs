// ABOUTME: Parser for positive-integer record identifiers taken from request paths
// ABOUTME: Rejects signs, non-digits, zero and values that overflow u64
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use recipe_core::errors::{AppError, AppResult};

/// Parse a path parameter into a record id
///
/// Only strings made entirely of ASCII digits are accepted, and the value
/// must be greater than zero. Leading zeros are allowed (`"007"` is `7`).
pub fn parse_id(raw: &str) -> AppResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_identifier(raw));
    }

    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::invalid_identifier(raw)),
    }
}
