//! Common response envelope and error mapping.
//!
//! Every endpoint answers `{ "success": bool, "data"?: ..., "error"?: string }`.
//! Validation and authorization messages are returned verbatim; database,
//! configuration, and upstream details are logged and replaced with a
//! generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use lexflow_shared::AppError;

/// The common response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wraps a payload in a success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    })
}

/// Handler error type carrying the application error taxonomy.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E: Into<AppError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if err.is_opaque() {
            error!(code = err.error_code(), detail = %err, "request failed");
            "An internal error occurred".to_string()
        } else {
            err.to_string()
        };

        let body: ApiResponse<()> = ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        };

        (status, Json(body)).into_response()
    }
}

/// Result alias for route handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ok(42);
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let body: ApiResponse<()> = ApiResponse {
            success: false,
            data: None,
            error: Some("Validation error: bad input".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"], "Validation error: bad input");
    }

    #[test]
    fn test_opaque_detail_not_in_between() {
        // Database detail must never reach the envelope.
        let err = ApiError(AppError::Database("connection refused".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
