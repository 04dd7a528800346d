pub mod classifier;
pub mod extraction;
pub mod processor;
pub mod structuring;

pub use classifier::*;
pub use processor::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("text extraction failed: {0}")]
    Extraction(#[from] extraction::ExtractionError),

    #[error("structured extraction failed: {0}")]
    Structuring(#[from] structuring::StructuringError),
}
