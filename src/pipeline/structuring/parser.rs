use serde_json::Value;

use super::StructuringError;

/// Parse the completion backend's free-text response as JSON.
///
/// Takes the widest `{...}` span in the response (first `{` to last `}`,
/// spanning newlines) and parses that; when no such span exists or it is not
/// valid JSON, falls back to parsing the entire response.
pub fn parse_model_response(response: &str) -> Result<Value, StructuringError> {
    if let Some(span) = object_span(response) {
        if let Ok(value) = serde_json::from_str(span) {
            return Ok(value);
        }
    }

    serde_json::from_str(response.trim())
        .map_err(|e| StructuringError::JsonParsing(e.to_string()))
}

fn object_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}
