// ABOUTME: Free-text sanitizers and canonical casing for names, descriptions, units and image URLs
// ABOUTME: Character-set checks return InvalidFormat errors naming the offending field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Text sanitization and normalization
//!
//! Sanitizers trim their input and check it against an allowed character
//! set. The capitalization helpers never fail; they are applied after a
//! sanitizer has accepted the value so that persisted text is always in
//! canonical form.

use recipe_core::constants::patterns;
use recipe_core::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn name_regex() -> Option<&'static Regex> {
    static NAME_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    NAME_REGEX
        .get_or_init(|| Regex::new(patterns::NAME).ok())
        .as_ref()
}

fn description_regex() -> Option<&'static Regex> {
    static DESCRIPTION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    DESCRIPTION_REGEX
        .get_or_init(|| Regex::new(patterns::DESCRIPTION).ok())
        .as_ref()
}

fn unit_regex() -> Option<&'static Regex> {
    static UNIT_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    UNIT_REGEX
        .get_or_init(|| Regex::new(patterns::UNIT).ok())
        .as_ref()
}

fn image_url_regex() -> Option<&'static Regex> {
    static IMAGE_URL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    IMAGE_URL_REGEX
        .get_or_init(|| Regex::new(patterns::IMAGE_URL).ok())
        .as_ref()
}

/// Trim `input` and require the result to match `regex`
fn check_pattern<'a>(
    regex: Option<&Regex>,
    input: &'a str,
    field: &str,
    allowed: &str,
) -> AppResult<&'a str> {
    let regex = regex.ok_or_else(|| AppError::internal("Text pattern failed to compile"))?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_format(format!("{field} must not be empty")));
    }
    if !regex.is_match(trimmed) {
        return Err(AppError::invalid_format(format!(
            "{field} '{trimmed}' may only contain {allowed}"
        )));
    }
    Ok(trimmed)
}

/// Sanitize a category or ingredient name: letters and whitespace only
pub fn sanitize_as_name<'a>(input: &'a str, field: &str) -> AppResult<&'a str> {
    check_pattern(name_regex(), input, field, "letters and spaces")
}

/// Sanitize a description, recipe name or instruction
///
/// Allows letters, digits, spaces and the punctuation `' - , .`
pub fn sanitize_as_description<'a>(input: &'a str, field: &str) -> AppResult<&'a str> {
    check_pattern(
        description_regex(),
        input,
        field,
        "letters, digits, spaces and the characters ' - , .",
    )
}

/// Sanitize a measurement unit: letters only
pub fn sanitize_unit<'a>(input: &'a str, field: &str) -> AppResult<&'a str> {
    check_pattern(unit_regex(), input, field, "letters")
}

/// Validate an image URL: `http(s)://` with a known image extension
pub fn validate_image_url<'a>(input: &'a str, field: &str) -> AppResult<&'a str> {
    let regex =
        image_url_regex().ok_or_else(|| AppError::internal("Text pattern failed to compile"))?;
    let trimmed = input.trim();
    if regex.is_match(trimmed) {
        Ok(trimmed)
    } else {
        Err(AppError::invalid_format(format!(
            "{field} must be an http(s) URL ending in .png, .jpg, .jpeg, .gif, .svg or .webp"
        )))
    }
}

/// Upper-case the first character of `word` and lower-case the rest
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Capitalize every space-separated word
///
/// `"iTALIAN food"` becomes `"Italian Food"`. Runs of spaces are preserved,
/// so applying this twice gives the same result as applying it once.
#[must_use]
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sentence-case free text
///
/// Sentences are delimited by `.`; runs of dots collapse, whitespace around
/// each dot is removed, each sentence is capitalized and the rest lower-cased,
/// and the result ends with exactly one `.`. Input without any sentence
/// text, blank or only dots, yields `""`.
#[must_use]
pub fn capitalize_sentences(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let sentences: Vec<String> = trimmed
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(capitalize_first)
        .collect();
    if sentences.is_empty() {
        return String::new();
    }

    let mut result = sentences.join(". ");
    result.push('.');
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use recipe_core::errors::ErrorCode;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("italian food"), "Italian Food");
        assert_eq!(capitalize_words("iTALIAN FOOD"), "Italian Food");
        assert_eq!(capitalize_words("garlic"), "Garlic");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_capitalize_words_is_idempotent() {
        for input in ["italian food", "  spaced   out ", "MiXeD CaSe", "a b c", "ÉCLAIR"] {
            let once = capitalize_words(input);
            assert_eq!(capitalize_words(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_capitalize_sentences() {
        assert_eq!(
            capitalize_sentences("classic dishes from ITALY.  pasta and more"),
            "Classic dishes from italy. Pasta and more."
        );
        assert_eq!(capitalize_sentences("hello...world"), "Hello. World.");
        assert_eq!(capitalize_sentences("  one sentence  "), "One sentence.");
        assert_eq!(capitalize_sentences("done."), "Done.");
    }

    #[test]
    fn test_capitalize_sentences_blank_input() {
        assert_eq!(capitalize_sentences(""), "");
        assert_eq!(capitalize_sentences("   "), "");
        assert_eq!(capitalize_sentences("..."), "");
        assert_eq!(capitalize_sentences(" . . "), "");
    }

    #[test]
    fn test_capitalize_sentences_single_trailing_dot() {
        for input in ["a", "a.", "a..", "a . . b", "x. y.. z...", " . lead"] {
            let out = capitalize_sentences(input);
            assert!(out.ends_with('.'), "input {input:?} -> {out:?}");
            assert!(!out.contains(".."), "input {input:?} -> {out:?}");
            assert_eq!(capitalize_sentences(&out), out, "input {input:?}");
        }
    }

    #[test]
    fn test_sanitize_as_name() {
        assert_eq!(sanitize_as_name("  italian food ", "Name").unwrap(), "italian food");
        let err = sanitize_as_name("pasta 2", "Name").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.starts_with("Name"));
        assert!(sanitize_as_name("   ", "Name").is_err());
    }

    #[test]
    fn test_sanitize_as_description() {
        assert_eq!(
            sanitize_as_description("Boil 2 cups, don't stir - then serve.", "Instruction").unwrap(),
            "Boil 2 cups, don't stir - then serve."
        );
        assert!(sanitize_as_description("50% off!", "Description").is_err());
    }

    #[test]
    fn test_sanitize_unit() {
        assert_eq!(sanitize_unit(" tsp ", "Unit").unwrap(), "tsp");
        assert!(sanitize_unit("2g", "Unit").is_err());
        assert!(sanitize_unit("fl oz", "Unit").is_err());
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("https://example.com/images/pasta.jpg", "Image").is_ok());
        assert!(validate_image_url("http://cdn.example.com/a.WEBP", "Image").is_ok());
        assert!(validate_image_url("ftp://example.com/a.png", "Image").is_err());
        assert!(validate_image_url("https://example.com/a.bmp", "Image").is_err());
        assert!(validate_image_url("", "Image").is_err());
    }
}
