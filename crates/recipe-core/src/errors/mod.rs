// ABOUTME: Unified error type and error codes for the recipe catalog API
// ABOUTME: Maps validation, lookup and store failures onto HTTP statuses and the JSON failure envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Unified Error Handling
//!
//! Every failure a handler can produce is an [`AppError`] carrying an
//! [`ErrorCode`]. Validation-kind codes surface as `400`, lookups as `404`,
//! and store failures as `500` with a generic message; the underlying cause
//! of a `500` is logged and never sent to the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Path identifier is not a positive integer
    #[serde(rename = "INVALID_IDENTIFIER")]
    InvalidIdentifier = 3000,
    /// A required field is absent or empty
    #[serde(rename = "MISSING_FIELD")]
    MissingField = 3001,
    /// A field does not match its allowed pattern or range
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A referenced category or ingredient does not exist
    #[serde(rename = "INVALID_REFERENCE")]
    InvalidReference = 3003,

    // Resource Management (4000-4999)
    /// No record with the requested id
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Another record already uses this name
    #[serde(rename = "DUPLICATE_NAME")]
    DuplicateName = 4001,
    /// The record is still referenced by recipes
    #[serde(rename = "RESOURCE_IN_USE")]
    ResourceInUse = 4002,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Persistence layer failure
    #[serde(rename = "STORE_FAILURE")]
    StoreFailure = 9001,
    /// Document (de)serialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
    /// Invalid process configuration
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidIdentifier
            | Self::MissingField
            | Self::InvalidFormat
            | Self::InvalidReference
            | Self::DuplicateName
            | Self::ResourceInUse => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 500 Internal Server Error
            Self::InternalError
            | Self::StoreFailure
            | Self::SerializationError
            | Self::ConfigError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "The identifier must be a positive integer",
            Self::MissingField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::InvalidReference => "A referenced resource does not exist",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::DuplicateName => "A resource with this name already exists",
            Self::ResourceInUse => "The resource is referenced by other resources",
            Self::InternalError => "An internal server error occurred",
            Self::StoreFailure => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::ConfigError => "Configuration error encountered",
        }
    }

    /// Whether this code is reported to clients verbatim
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (for example the reference count of `ResourceInUse`)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Number of referencing records carried by a `ResourceInUse` error
    #[must_use]
    pub fn reference_count(&self) -> Option<u64> {
        self.details.get("references").and_then(serde_json::Value::as_u64)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// JSON failure envelope: `{"success": false, "error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Client-facing message
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        // Store and internal failures never leak their cause
        let message = if error.code.is_client_error() {
            error.message.clone()
        } else {
            error.code.description().to_owned()
        };
        Self {
            success: false,
            error: message,
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Path identifier rejected by the identifier parser
    pub fn invalid_identifier(raw: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidIdentifier, format!("Invalid ID '{raw}'"))
    }

    /// Required field absent or empty
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingField, message)
    }

    /// Field value rejected by a sanitizer
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Reference to a record that does not exist
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidReference, message)
    }

    /// Name collides with an existing record
    pub fn duplicate_name(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateName, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Record still referenced by `count` recipes
    pub fn resource_in_use(message: impl Into<String>, count: u64) -> Self {
        Self::new(ErrorCode::ResourceInUse, message)
            .with_details(serde_json::json!({ "references": count }))
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Store failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreFailure, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("Document serialization failed: {error}"),
        )
        .with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(format!("Database query failed: {error}")).with_source(error)
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                tracing::error!(
                    error.code = ?self.code,
                    error.message = %self.message,
                    error.source = ?self.source,
                    "Request failed"
                );
            } else {
                tracing::debug!(
                    error.code = ?self.code,
                    error.message = %self.message,
                    "Request rejected"
                );
            }

            let body = ErrorResponse::from(&self);
            (status, Json(body)).into_response()
        }
    }
}
