//! Structural extraction
//!
//! Walks a document's paragraph stream once, keeping non-blank paragraphs,
//! counting word units and collecting heading candidates, then nests the
//! headings into an outline tree.

use super::models::*;
use super::outline::build_tree;
use super::parsing::heading::classify_style;
use super::parsing::text::count_word_units;

/// Extract paragraph records and the heading outline from a paragraph stream.
///
/// Blank paragraphs are dropped but still consume their position, so the
/// sequence index of every kept paragraph is its position in `paragraphs`.
pub fn extract(paragraphs: &[SourceParagraph]) -> ExtractionResult {
    let mut result = ExtractionResult::default();

    for (sequence_index, para) in paragraphs.iter().enumerate() {
        let text = para.raw_text.trim();
        if text.is_empty() {
            continue;
        }

        let word_count = count_word_units(text);
        result.paragraphs.push(ParagraphRecord {
            sequence_index,
            text: text.to_string(),
            word_count,
        });
        result.total_word_count += word_count;
        result.paragraph_count += 1;

        if let Some(level) = classify_style(&para.style_name) {
            result.outline_flat.push(HeadingRecord {
                sequence_index,
                text: text.to_string(),
                level,
                style_label: para.style_name.clone(),
            });
        }
    }

    result.outline_tree = build_tree(&result.outline_flat);

    log::debug!(
        "Extracted {} of {} paragraphs ({} word units, {} headings)",
        result.paragraph_count,
        paragraphs.len(),
        result.total_word_count,
        result.outline_flat.len()
    );

    result
}
