// ABOUTME: HTTP middleware for request tracing and CORS
// ABOUTME: Provides request id generation, per-request spans and cross-origin configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

/// CORS configuration
pub mod cors;
/// Request id generation and per-request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{
    create_request_span, http_trace_layer, MakeRequestUuid, REQUEST_ID_HEADER,
};
