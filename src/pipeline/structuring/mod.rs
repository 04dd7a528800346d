pub mod clean;
pub mod llm;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod schema;

pub use clean::*;
pub use llm::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use schema::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructuringError {
    #[error("completion backend unreachable at {0}")]
    Connection(String),

    #[error("completion API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("model response is not valid JSON: {0}")]
    JsonParsing(String),

    #[error("completion response body could not be decoded: {0}")]
    ResponseParsing(String),

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
