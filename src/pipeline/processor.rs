use chrono::Utc;

use super::classifier::{DocType, DocumentClassifier};
use super::extraction::TextExtractor;
use super::structuring::{DealExtractor, DealRecord};
use super::PipelineError;

/// Result of running one document through the full pipeline.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub processing_id: String,
    pub file_name: String,
    pub doc_type: DocType,
    pub record: DealRecord,
}

/// The linear per-document pipeline:
/// text extraction → classification → structured extraction.
///
/// Holds no mutable state; concurrent callers share nothing but the static
/// keyword tables.
pub struct DocumentPipeline {
    text_extractor: TextExtractor,
    classifier: DocumentClassifier,
    deal_extractor: DealExtractor,
}

impl DocumentPipeline {
    pub fn new(
        text_extractor: TextExtractor,
        classifier: DocumentClassifier,
        deal_extractor: DealExtractor,
    ) -> Self {
        Self {
            text_extractor,
            classifier,
            deal_extractor,
        }
    }

    /// Process one uploaded PDF end to end.
    pub fn process(
        &self,
        file_name: &str,
        pdf_bytes: &[u8],
    ) -> Result<ProcessedDocument, PipelineError> {
        let _span = tracing::info_span!("process_document", file = file_name).entered();

        let text = self.text_extractor.extract(pdf_bytes)?;
        let doc_type = self.classifier.classify(&text);
        let mut record = self.deal_extractor.extract(&text, doc_type)?;
        record.metadata.source_file_name = file_name.to_string();

        Ok(ProcessedDocument {
            processing_id: format!("proc_{}", Utc::now().format("%Y%m%d_%H%M%S")),
            file_name: file_name.to_string(),
            doc_type,
            record,
        })
    }
}
