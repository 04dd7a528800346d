use super::ocr::{DisabledOcr, OcrEngine};
use super::pdf::{extract_with_lopdf, extract_with_pdf_extract};
use super::ExtractionError;

/// A strategy result under this many characters triggers the next fallback.
const MIN_TEXT_CHARS: usize = 100;

/// Text extraction cascade: pdf-extract, then a lopdf content-stream walk,
/// then OCR. Each stage only runs when the previous one produced too little
/// text.
pub struct TextExtractor {
    ocr: Box<dyn OcrEngine>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(Box::new(DisabledOcr))
    }
}

impl TextExtractor {
    pub fn new(ocr: Box<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extract and normalize text from a PDF.
    ///
    /// Returns an error only when no strategy produced any text; a short
    /// but non-empty result is returned as-is.
    pub fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        let _span = tracing::info_span!("extract_text", bytes = pdf_bytes.len()).entered();

        let mut last_error: Option<ExtractionError> = None;

        let mut text = match extract_with_pdf_extract(pdf_bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, "pdf-extract strategy failed");
                last_error = Some(e);
                String::new()
            }
        };

        if text.trim().len() < MIN_TEXT_CHARS {
            tracing::debug!("primary extraction minimal, trying lopdf");
            match extract_with_lopdf(pdf_bytes) {
                Ok(fallback) if fallback.trim().len() > text.trim().len() => text = fallback,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "lopdf strategy failed");
                    last_error = Some(e);
                }
            }
        }

        if text.trim().len() < MIN_TEXT_CHARS {
            tracing::debug!("still minimal text, attempting OCR");
            match self.ocr.recognize(pdf_bytes) {
                Ok(ocr_text) if ocr_text.trim().len() > text.trim().len() => text = ocr_text,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "OCR strategy failed");
                    last_error = Some(e);
                }
            }
        }

        let cleaned = clean_text(&text);
        if cleaned.is_empty() {
            return Err(last_error.unwrap_or(ExtractionError::EmptyDocument));
        }

        tracing::info!(chars = cleaned.len(), "text extracted");
        Ok(cleaned)
    }
}

/// Normalize extracted text: trim each line and drop blank ones.
fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
