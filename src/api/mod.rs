pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::app_router;
pub use types::AppState;
