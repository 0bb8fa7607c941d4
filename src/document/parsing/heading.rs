//! Heading classification from paragraph style names
//!
//! Only the style name decides whether a paragraph is a heading. `"Title"`
//! is level 0; any style starting with `"Heading"` takes its level from the
//! last whitespace-separated token of the name, falling back to level 1.

const TITLE_STYLE: &str = "Title";
const HEADING_PREFIX: &str = "Heading";
const DEFAULT_HEADING_LEVEL: u32 = 1;

/// Classify a paragraph style name, returning its outline level if it is a heading.
///
/// Never fails: a heading style whose suffix is missing or not a
/// non-negative integer is placed at level 1.
pub(crate) fn classify_style(style_name: &str) -> Option<u32> {
    if style_name == TITLE_STYLE {
        return Some(0);
    }

    if style_name.starts_with(HEADING_PREFIX) {
        return Some(heading_level_from_style(style_name));
    }

    None
}

fn heading_level_from_style(style_name: &str) -> u32 {
    style_name
        .split_whitespace()
        .last()
        .and_then(|token| token.parse::<u32>().ok())
        .unwrap_or(DEFAULT_HEADING_LEVEL)
}
