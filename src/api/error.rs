//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::export::ExportError;
use crate::pipeline::PipelineError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error("file exceeds the {limit_mb} MB upload limit")]
    PayloadTooLarge { limit_mb: u64 },
    #[error("document could not be read: {0}")]
    DocumentUnreadable(String),
    #[error("extraction backend unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("export failed: {0}")]
    ExportFailed(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::PayloadTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                self.to_string(),
            ),
            ApiError::DocumentUnreadable(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_UNREADABLE",
                detail.clone(),
            ),
            ApiError::UpstreamUnavailable(detail) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                detail.clone(),
            ),
            ApiError::ExportFailed(detail) => {
                (StatusCode::BAD_GATEWAY, "EXPORT_FAILED", detail.clone())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Extraction(e) => ApiError::DocumentUnreadable(e.to_string()),
            PipelineError::Structuring(e) => ApiError::UpstreamUnavailable(e.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("Only PDF files are supported".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unreadable_document_returns_422() {
        let response = ApiError::DocumentUnreadable("no text".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn upstream_unavailable_returns_502() {
        let response = ApiError::UpstreamUnavailable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UPSTREAM_UNAVAILABLE");
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let response = ApiError::Internal("db exploded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn payload_too_large_returns_413() {
        let response = ApiError::PayloadTooLarge { limit_mb: 10 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
