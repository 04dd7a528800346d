use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;

use super::error::ApiError;
use super::types::{
    AppState, ExportRequest, ExportResponse, HealthResponse, ProcessResponse,
    SupportedFormatsResponse,
};

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "dealflow API is running" }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn supported_formats() -> Json<SupportedFormatsResponse> {
    Json(SupportedFormatsResponse::current())
}

/// Upload one PDF and run it through the full pipeline.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, ApiError> {
    let mut file: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.pdf").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            file = Some((filename, bytes));
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| ApiError::BadRequest("missing multipart field: file".into()))?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::BadRequest("Only PDF files are supported".into()));
    }
    if bytes.len() > state.config.max_file_size_bytes() {
        return Err(ApiError::PayloadTooLarge {
            limit_mb: state.config.max_file_size_mb,
        });
    }

    tracing::info!(file = %filename, size = bytes.len(), "processing upload");

    let pipeline = Arc::clone(&state.pipeline);
    let name = filename.clone();
    let processed = tokio::task::spawn_blocking(move || pipeline.process(&name, &bytes))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ProcessResponse {
        processing_id: processed.processing_id,
        filename,
        doc_type: processed.doc_type,
        extracted_data: processed.record,
        status: "success",
    }))
}

/// Write an already-extracted record into the sheet store.
pub async fn export_to_sheets(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, ApiError> {
    let exporter = Arc::clone(&state.exporter);
    tokio::task::spawn_blocking(move || exporter.export(&request.extracted_data))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ExportResponse {
        status: "success",
        message: "Data exported to sheet store successfully",
    }))
}
