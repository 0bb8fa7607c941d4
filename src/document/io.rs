//! File validation
//!
//! Checks that a path or an uploaded byte buffer is a Word .docx container
//! before the document model is asked to decode it.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Validates that the file is a legitimate .docx file
pub fn validate_docx_file(file_path: &Path) -> Result<()> {
    validate_docx_name(file_path)?;
    let file = File::open(file_path)?;
    validate_docx_container(file)
}

/// Validates an uploaded buffer and the file name it was submitted under.
pub fn validate_docx_upload(file_name: &str, bytes: &[u8]) -> Result<()> {
    validate_docx_name(Path::new(file_name))?;
    validate_docx_container(Cursor::new(bytes))
}

/// Read a text part such as `word/styles.xml` out of a .docx container.
///
/// A part the container does not have is `Ok(None)`.
pub(crate) fn read_docx_part(bytes: &[u8], part_name: &str) -> Result<Option<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut part = match archive.by_name(part_name) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    part.read_to_string(&mut content)?;
    Ok(Some(content))
}

fn validate_docx_name(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "docx" {
        return Err(Error::InvalidFormat(format!(
            "expected a .docx file, got .{extension} (only Word .docx documents are supported)"
        )));
    }

    Ok(())
}

fn validate_docx_container<R: Read + Seek>(reader: R) -> Result<()> {
    let mut archive = ZipArchive::new(reader)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::InvalidFormat(
                "this appears to be an Excel file (.xlsx), not a Word document".to_string(),
            ));
        }

        return Err(Error::InvalidFormat(
            "missing word/document.xml; the file may be corrupted or is not a Word document"
                .to_string(),
        ));
    }

    Ok(())
}
