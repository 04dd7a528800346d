use super::schema::DealRecord;
use crate::pipeline::classifier::DocType;

/// Characters of document text included in the prompt. Keeps the request
/// under the completion backend's token limits.
pub const PROMPT_EXCERPT_CHARS: usize = 4000;

pub const EXTRACTION_SYSTEM_PROMPT: &str = "You are an expert M&A analyst. \
Extract structured data from documents with high accuracy. Return only valid JSON.";

/// Build the extraction prompt: document type, a length-capped excerpt of the
/// document text, the target schema as an example structure, and formatting
/// rules.
pub fn build_extraction_prompt(text: &str, doc_type: DocType) -> String {
    let excerpt: String = text.chars().take(PROMPT_EXCERPT_CHARS).collect();

    format!(
        r#"Extract M&A deal information from this {doc_type} document. Return data in the exact JSON format specified below.

Document Text:
{excerpt}

Required JSON Format:
{template}

Instructions:
1. Extract only information that is explicitly stated in the document
2. Use "N/A" for fields that cannot be determined
3. For dates, use format: YYYY-MM-DD
4. For monetary values, include only numbers (no currency symbols)
5. For deal_type, use "Asset" or "Corporate"
6. For technology_type, use: Solar, Wind, BESS, Hydro, Gas, etc.
7. Return only valid JSON, no additional text

JSON Response:
"#,
        template = DealRecord::prompt_template(),
    )
}
