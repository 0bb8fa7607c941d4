//! Document loading and orchestration
//!
//! This module is the document-model side of extraction: it opens a .docx
//! container with docx-rs, turns the body paragraphs into
//! [`SourceParagraph`]s with resolved style names, and hands them to
//! [`extract`].

use std::path::Path;

use super::extract::extract;
use super::io::{read_docx_part, validate_docx_file, validate_docx_upload};
use super::models::*;
use super::parsing::style::{StyleTable, default_paragraph_style_id};
use super::parsing::text::extract_paragraph_text;
use crate::error::Result;

/// Decode a .docx container into its ordered body paragraphs.
///
/// Only top-level body paragraphs are returned. Tables and other block
/// content are skipped without consuming a position in the sequence.
pub fn decode_paragraphs(bytes: &[u8]) -> Result<Vec<SourceParagraph>> {
    let docx = docx_rs::read_docx(bytes)?;
    // docx-rs has already opened the container; an unreadable styles part
    // only costs the default-style lookup.
    let default_style_id = read_docx_part(bytes, "word/styles.xml")
        .ok()
        .flatten()
        .as_deref()
        .and_then(default_paragraph_style_id);
    let styles = StyleTable::from_styles(&docx.styles).with_default_id(default_style_id);

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(SourceParagraph {
                raw_text: extract_paragraph_text(para),
                style_name: styles.paragraph_style(para),
            }),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

/// Decode and extract a document held in memory.
pub fn extract_bytes(bytes: &[u8]) -> Result<ExtractionResult> {
    let paragraphs = decode_paragraphs(bytes)?;
    Ok(extract(&paragraphs))
}

/// Validate, decode and extract an uploaded submission.
pub fn extract_upload(file_name: &str, bytes: &[u8]) -> Result<ExtractionResult> {
    validate_docx_upload(file_name, bytes)?;
    extract_bytes(bytes)
}

/// Main document loading function
///
/// Validates the file, reads it and returns the extracted structure.
pub async fn load_document(file_path: &Path) -> Result<ExtractionResult> {
    validate_docx_file(file_path)?;

    let file_data = tokio::fs::read(file_path).await?;
    log::debug!(
        "Read {} bytes from {}",
        file_data.len(),
        file_path.display()
    );

    extract_bytes(&file_data)
}
