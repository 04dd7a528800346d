pub mod csv;
pub mod exporter;
pub mod rows;
pub mod sheets;

pub use csv::*;
pub use exporter::*;
pub use rows::*;
pub use sheets::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sheet does not exist: {0}")]
    UnknownSheet(String),

    #[error("sheet store lock poisoned")]
    LockPoisoned,
}
