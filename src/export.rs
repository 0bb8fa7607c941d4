//! Rendering of extraction results for the command line

use crate::document::{ExtractionResult, OutlineNode, ViewerRole, project, summarize};
use crate::error::Result;

/// Export format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The stored blob as JSON
    Json,
    /// Indented heading tree
    Outline,
    /// Word, paragraph and heading counts
    Summary,
}

pub fn export(
    result: &ExtractionResult,
    format: ExportFormat,
    role: ViewerRole,
    pretty: bool,
) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(result, role, pretty),
        ExportFormat::Outline if role == ViewerRole::Privileged => Ok(export_outline(result)),
        // Restricted viewers never see heading text
        ExportFormat::Outline | ExportFormat::Summary => Ok(export_summary(result)),
    }
}

pub fn export_json(result: &ExtractionResult, role: ViewerRole, pretty: bool) -> Result<String> {
    let value = project(result, role)?;
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

pub fn export_outline(result: &ExtractionResult) -> String {
    let mut output = String::new();
    let mut pending: Vec<(&OutlineNode, usize)> =
        result.outline_tree.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, indent)) = pending.pop() {
        output.push_str(&"  ".repeat(indent));
        output.push_str(&format!("{} [#{} {}]\n", node.text, node.id, node.style_label));
        pending.extend(node.children.iter().rev().map(|child| (child, indent + 1)));
    }

    output
}

pub fn export_summary(result: &ExtractionResult) -> String {
    let summary = summarize(result);
    format!(
        "Words: {}\nParagraphs: {}\nHeadings: {}\n",
        summary.total_words_count, summary.paragraph_count, summary.heading_count
    )
}
