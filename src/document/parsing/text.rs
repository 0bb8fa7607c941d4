//! Text extraction and counting utilities
//!
//! This module pulls plain paragraph text out of docx-rs paragraph and run
//! elements and implements the word-unit count used for statistics.

/// Extract plain text from a paragraph, handling various child elements
///
/// The text is returned untrimmed; extraction decides what counts as blank.
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_children_text(&link.children, text);
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Tracked deletions are not part of the visible text
            }
            _ => {}
        }
    }
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Count word units: every character except the ASCII space.
///
/// This is a character count, not a token count. Each code point is one
/// unit, so logographic text counts one unit per character. Tabs and other
/// whitespace are counted.
pub(crate) fn count_word_units(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}
