//! Document parsing and structural extraction module
//!
//! This module decodes Microsoft Word (.docx) documents into an ordered
//! paragraph stream and extracts paragraph statistics and a nested heading
//! outline from it.

pub(crate) mod io;
pub mod extract;
pub mod loader;
pub mod models;
pub mod outline;
pub(crate) mod parsing;
pub mod query;

// Re-export the public API
pub use extract::extract;
pub use io::{validate_docx_file, validate_docx_upload};
pub use loader::{decode_paragraphs, extract_bytes, extract_upload, load_document};
pub use models::*;
pub use outline::{build_tree, flatten};
pub use query::*;
