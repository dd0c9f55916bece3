// ABOUTME: Response envelopes shared by the catalog route handlers
// ABOUTME: Builds the success envelopes and maps JSON body rejections to InvalidFormat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_core::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Success envelope carrying a single record
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// Always `true`
    pub success: bool,
    /// Projected record
    pub data: Value,
}

/// Success envelope carrying a list of records
#[derive(Debug, Serialize)]
pub struct ListResponse {
    /// Always `true`
    pub success: bool,
    /// Number of records in `data`
    pub count: usize,
    /// Projected records
    pub data: Value,
}

/// Success envelope for deletes
#[derive(Debug, Serialize)]
pub struct CountResponse {
    /// Always `true`
    pub success: bool,
    /// Number of records removed
    pub count: u64,
}

/// `{success: true, data}` with the given status
pub fn data_response(status: StatusCode, data: Value) -> Response {
    (status, Json(DataResponse { success: true, data })).into_response()
}

/// `{success: true, count, data}` with status 200
pub fn list_response(data: Value) -> Response {
    let count = data.as_array().map_or(0, Vec::len);
    (
        StatusCode::OK,
        Json(ListResponse {
            success: true,
            count,
            data,
        }),
    )
        .into_response()
}

/// `{success: true, count}` with status 200
pub fn count_response(count: u64) -> Response {
    (
        StatusCode::OK,
        Json(CountResponse {
            success: true,
            count,
        }),
    )
        .into_response()
}

/// Unwrap a JSON body, turning malformed input into `InvalidFormat`
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!(rejection = %rejection.body_text(), "Rejected request body");
        AppError::invalid_format(format!("Invalid request body: {}", rejection.body_text()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_list_response_counts_items() {
        let response = list_response(serde_json::json!([{"id": 1}, {"id": 2}]));
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 2);
    }
}
