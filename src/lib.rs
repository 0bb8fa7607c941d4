//! docx-outline: paragraph statistics and heading outlines for .docx files
//!
//! This library decodes Microsoft Word documents into their ordered
//! paragraph stream, counts word units per paragraph and nests the title
//! and heading paragraphs into an outline tree.

pub mod config;
pub mod document;
pub mod error;
pub mod export;

// Re-export commonly used types
pub use config::Config;
pub use document::{
    ExtractionResult, HeadingRecord, OutlineNode, ParagraphRecord, SourceParagraph, ViewerRole,
    build_tree, extract,
};
pub use error::{Error, Result};
pub use export::ExportFormat;
