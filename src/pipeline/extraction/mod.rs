pub mod ocr;
pub mod orchestrator;
pub mod pdf;

pub use ocr::*;
pub use orchestrator::*;
pub use pdf::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("document produced no text")]
    EmptyDocument,
}
