//! Import/export errors.

use crate::infrastructure::ports::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Archive I/O error: {0}")]
    ArchiveIo(#[from] std::io::Error),
}
