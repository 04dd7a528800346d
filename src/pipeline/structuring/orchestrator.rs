use chrono::Utc;

use super::clean::{generate_deal_id, merge_and_clean};
use super::llm::{CompletionClient, OpenAiClient};
use super::parser::parse_model_response;
use super::prompt::{build_extraction_prompt, EXTRACTION_SYSTEM_PROMPT};
use super::schema::DealRecord;
use super::StructuringError;
use crate::config::AppConfig;
use crate::pipeline::classifier::DocType;

/// Near-deterministic sampling for extraction.
const TEMPERATURE: f32 = 0.1;
/// Response length cap.
const MAX_TOKENS: u32 = 2000;

/// Orchestrates structured deal extraction:
/// prompt → completion → parse → merge/clean → stamp.
pub struct DealExtractor {
    client: Box<dyn CompletionClient>,
    model: String,
}

impl DealExtractor {
    pub fn new(client: Box<dyn CompletionClient>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    /// Build an extractor backed by the configured OpenAI-compatible API.
    pub fn from_config(config: &AppConfig) -> Result<Self, StructuringError> {
        let client = OpenAiClient::new(
            &config.completion_base_url,
            config.api_key.clone(),
            config.request_timeout_secs,
        )?;
        Ok(Self::new(Box::new(client), &config.primary_model))
    }

    /// Extract a schema-shaped deal record from document text.
    ///
    /// Transport and API failures from the completion backend propagate as
    /// `Err` so the caller can retry. A response that cannot be parsed as
    /// JSON degrades to an all-default record with
    /// `metadata.extraction_error` set.
    pub fn extract(&self, text: &str, doc_type: DocType) -> Result<DealRecord, StructuringError> {
        let _span = tracing::info_span!("extract", doc_type = %doc_type).entered();

        let prompt = build_extraction_prompt(text, doc_type);
        let response = self.client.complete(
            &self.model,
            EXTRACTION_SYSTEM_PROMPT,
            &prompt,
            TEMPERATURE,
            MAX_TOKENS,
        )?;

        let mut record = match parse_model_response(&response) {
            Ok(parsed) => merge_and_clean(&parsed),
            Err(e) => {
                tracing::warn!(error = %e, "model response not parseable, returning defaults");
                let mut record = DealRecord::default();
                record.metadata.extraction_error = e.to_string();
                record
            }
        };

        // Stamped after cleaning; model-provided values never survive.
        record.metadata.deal_id = generate_deal_id(&record.deal_summary);
        record.metadata.date_processed = Utc::now().to_rfc3339();

        tracing::info!(deal_id = %record.metadata.deal_id, "extraction complete");
        Ok(record)
    }
}
