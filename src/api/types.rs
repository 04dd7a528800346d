use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::export::SheetExporter;
use crate::pipeline::classifier::DocType;
use crate::pipeline::structuring::DealRecord;
use crate::pipeline::DocumentPipeline;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pipeline: Arc<DocumentPipeline>,
    pub exporter: Arc<SheetExporter>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub processing_id: String,
    pub filename: String,
    pub doc_type: DocType,
    pub extracted_data: DealRecord,
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub extracted_data: DealRecord,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SupportedFormatsResponse {
    pub file_formats: Vec<&'static str>,
    pub document_types: Vec<&'static str>,
}

impl SupportedFormatsResponse {
    pub fn current() -> Self {
        Self {
            file_formats: vec!["pdf"],
            document_types: vec![
                DocType::PressRelease.as_str(),
                DocType::QuarterlyReport.as_str(),
                DocType::AnnualReport.as_str(),
                DocType::InvestorDeck.as_str(),
                DocType::Other.as_str(),
            ],
        }
    }
}
