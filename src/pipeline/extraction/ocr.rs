use super::ExtractionError;

/// Last-resort text producer for scanned documents. The actual OCR backend
/// (cloud vision, tesseract, …) is an external collaborator; this crate only
/// owns the seam.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// OCR stand-in used when no backend is configured. Yields no text, so the
/// cascade result is whatever the PDF strategies produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn recognize(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        tracing::debug!("no OCR backend configured, skipping");
        Ok(String::new())
    }
}
