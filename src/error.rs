// src/error.rs
use epii_traits::LoaderError;
use epii_types::DocumentError;
use thiserror::Error;

/// Top-level error for the library surface and the command line tool.
///
/// Pipeline runs, injection and rendering never fail; this only covers
/// building documents and loaders and the I/O around them.
#[derive(Error, Debug)]
pub enum EpiiError {
    #[error("Invalid document: {0}")]
    Document(#[from] DocumentError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
