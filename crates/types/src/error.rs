use thiserror::Error;

/// Errors raised while building the document model.
///
/// Normalization itself never fails; these cover direct misuse of the
/// constructors and malformed JSON text.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("meta entries must be built from a non-null value")]
    NullMeta,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
