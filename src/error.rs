//! Error types for docx-outline.

use std::io;
use thiserror::Error;

/// Result type alias for docx-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The document model could not open or decode the container.
    #[error("Failed to decode document: {0}")]
    DocumentDecode(String),

    /// The file is not a Word .docx document.
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A persisted result blob could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::DocumentDecode(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::DocumentDecode(err.to_string())
    }
}
