// ABOUTME: Field-level rules applied to request bodies before persisting
// ABOUTME: Required-field checks, canonical normalization and clear-on-empty update semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::text::{
    capitalize_sentences, capitalize_words, sanitize_as_description, sanitize_as_name,
    validate_image_url,
};
use recipe_core::errors::{AppError, AppResult};

/// Require a non-blank string field
pub fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::missing_field(format!("Field '{field}' is required"))),
    }
}

/// Sanitize and capitalize a category or ingredient name
pub fn normalize_name(raw: &str, field: &str) -> AppResult<String> {
    Ok(capitalize_words(sanitize_as_name(raw, field)?))
}

/// Sanitize and capitalize a recipe name (extended character set)
pub fn normalize_title(raw: &str, field: &str) -> AppResult<String> {
    Ok(capitalize_words(sanitize_as_description(raw, field)?))
}

/// Sanitize and sentence-case a description or instruction
pub fn normalize_description(raw: &str, field: &str) -> AppResult<String> {
    Ok(capitalize_sentences(sanitize_as_description(raw, field)?))
}

/// Optional description on create: blank means absent
pub fn optional_description(value: Option<String>) -> AppResult<Option<String>> {
    match value {
        Some(text) if !text.trim().is_empty() => normalize_description(&text, "description")
            .map(|description| Some(description).filter(|d| !d.is_empty())),
        _ => Ok(None),
    }
}

/// Optional image on create: blank means absent
pub fn optional_image(value: Option<String>) -> AppResult<Option<String>> {
    match value {
        Some(url) if !url.trim().is_empty() => {
            validate_image_url(&url, "image").map(|url| Some(url.to_owned()))
        }
        _ => Ok(None),
    }
}

/// Description present in an update: `""` clears it
pub fn updated_description(value: &str) -> AppResult<String> {
    if value.trim().is_empty() {
        Ok(String::new())
    } else {
        normalize_description(value, "description")
    }
}

/// Image present in an update: `""` clears it
pub fn updated_image(value: &str) -> AppResult<String> {
    if value.trim().is_empty() {
        Ok(String::new())
    } else {
        validate_image_url(value, "image").map(str::to_owned)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use recipe_core::errors::ErrorCode;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text(Some("x".to_owned()), "name").unwrap(), "x");
        let err = required_text(Some("  ".to_owned()), "name").unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.message, "Field 'name' is required");
        assert!(required_text(None, "name").is_err());
    }

    #[test]
    fn test_normalizers() {
        assert_eq!(normalize_name(" italian food ", "name").unwrap(), "Italian Food");
        assert_eq!(normalize_title("chicken curry 2", "name").unwrap(), "Chicken Curry 2");
        assert_eq!(
            normalize_description("rich. creamy", "description").unwrap(),
            "Rich. Creamy."
        );
        assert!(normalize_name("caf3", "name").is_err());
    }

    #[test]
    fn test_optional_and_cleared_fields() {
        assert_eq!(optional_description(Some(String::new())).unwrap(), None);
        assert_eq!(optional_description(Some("..".to_owned())).unwrap(), None);
        assert_eq!(updated_description(" ... ").unwrap(), "");
        assert_eq!(optional_image(None).unwrap(), None);
        assert_eq!(updated_description("").unwrap(), "");
        assert_eq!(updated_image("").unwrap(), "");
        assert!(updated_image("not a url").is_err());
    }
}
