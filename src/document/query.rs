//! Read-only queries and viewer projections over extraction results
//!
//! Graders see the complete result; other viewers only get the counts.

use super::models::*;

/// Word, paragraph and heading counts of a result.
pub fn summarize(result: &ExtractionResult) -> DocumentSummary {
    DocumentSummary {
        total_words_count: result.total_word_count,
        paragraph_count: result.paragraph_count,
        heading_count: result.heading_count(),
    }
}

/// The JSON a viewer with the given role is allowed to see.
pub fn project(result: &ExtractionResult, role: ViewerRole) -> serde_json::Result<serde_json::Value> {
    match role {
        ViewerRole::Privileged => serde_json::to_value(result),
        ViewerRole::Restricted => serde_json::to_value(summarize(result)),
    }
}

/// The heading record at a sequence index, if that paragraph is a heading.
pub fn find_heading(result: &ExtractionResult, id: usize) -> Option<&HeadingRecord> {
    result
        .outline_flat
        .binary_search_by_key(&id, |heading| heading.sequence_index)
        .ok()
        .map(|index| &result.outline_flat[index])
}

/// Text of the kept paragraph at a sequence index, if it was not blank.
pub fn paragraph_text(result: &ExtractionResult, id: usize) -> Option<&str> {
    result
        .paragraphs
        .binary_search_by_key(&id, |para| para.sequence_index)
        .ok()
        .map(|index| result.paragraphs[index].text.as_str())
}
