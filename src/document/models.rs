//! Core data structures for the extracted document structure
//!
//! This module defines the public types produced by extraction: kept
//! paragraphs, flat heading records and the nested outline forest. The
//! serialized field names match the stored submission blob (`id`, `style`,
//! `outline`, `total_words_count`), so a persisted result deserializes back
//! into the same value.

use serde::{Deserialize, Serialize};

/// One paragraph as exposed by the document model: raw text and style name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceParagraph {
    pub raw_text: String,
    pub style_name: String,
}

impl SourceParagraph {
    pub fn new(raw_text: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            style_name: style_name.into(),
        }
    }
}

/// A non-blank paragraph kept by extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Position in the original paragraph stream, blanks included.
    #[serde(rename = "id")]
    pub sequence_index: usize,
    pub text: String,
    pub word_count: usize,
}

/// A kept paragraph whose style marks it as a title or heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    #[serde(rename = "id")]
    pub sequence_index: usize,
    pub text: String,
    pub level: u32,
    #[serde(rename = "style")]
    pub style_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Sequence index of the source heading.
    pub id: usize,
    pub text: String,
    pub level: u32,
    #[serde(rename = "style")]
    pub style_label: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub(crate) fn leaf(record: &HeadingRecord) -> Self {
        OutlineNode {
            id: record.sequence_index,
            text: record.text.clone(),
            level: record.level,
            style_label: record.style_label.clone(),
            children: Vec::new(),
        }
    }

    /// The heading record this node was built from.
    pub fn to_record(&self) -> HeadingRecord {
        HeadingRecord {
            sequence_index: self.id,
            text: self.text.clone(),
            level: self.level,
            style_label: self.style_label.clone(),
        }
    }
}

/// Everything extracted from one document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(rename = "total_words_count")]
    pub total_word_count: usize,
    pub paragraph_count: usize,
    pub paragraphs: Vec<ParagraphRecord>,
    #[serde(rename = "outline")]
    pub outline_flat: Vec<HeadingRecord>,
    pub outline_tree: Vec<OutlineNode>,
}

impl ExtractionResult {
    /// Serialize into the blob handed to persistence.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a previously persisted blob.
    ///
    /// The outline tree nests one JSON level per heading level, so the
    /// default recursion limit would reject deep outlines that `to_json`
    /// wrote.
    pub fn from_json(blob: &str) -> serde_json::Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(blob);
        deserializer.disable_recursion_limit();
        let result = Self::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(result)
    }

    pub fn heading_count(&self) -> usize {
        self.outline_flat.len()
    }
}

/// Counts-only view of a result, for viewers not allowed the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub total_words_count: usize,
    pub paragraph_count: usize,
    pub heading_count: usize,
}

/// Who is looking at a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    /// Graders: the complete blob including text and outline tree
    #[default]
    Privileged,
    /// Everyone else: counts only
    Restricted,
}
