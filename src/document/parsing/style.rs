//! Paragraph style name resolution
//!
//! Paragraphs reference their style by id (`w:pStyle`, e.g. `Heading1`),
//! while classification works on the display name from the styles part
//! (e.g. `Heading 1`). `StyleTable` maps one onto the other.
//!
//! Word stores some built-in names in lowercase (`heading 1`, `caption`);
//! those are reported in their UI spelling, so `heading 2` becomes
//! `Heading 2`.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;

const FALLBACK_DEFAULT_ID: &str = "Normal";
const FALLBACK_DEFAULT_NAME: &str = "Normal";

#[derive(Debug, Clone, Default)]
pub(crate) struct StyleTable {
    names: HashMap<String, String>,
    default_id: Option<String>,
}

impl StyleTable {
    /// Collect the paragraph styles declared in a document's styles part.
    pub(crate) fn from_styles(styles: &docx_rs::Styles) -> Self {
        let names = styles
            .styles
            .iter()
            .filter(|style| matches!(style.style_type, docx_rs::StyleType::Paragraph))
            .map(|style| {
                let name = match style_display_name(&style.name) {
                    Some(name) if !name.is_empty() => ui_style_name(&name),
                    _ => style.style_id.clone(),
                };
                (style.style_id.clone(), name)
            })
            .collect();

        StyleTable {
            names,
            default_id: None,
        }
    }

    /// Use the style marked `w:default` as the default paragraph style.
    pub(crate) fn with_default_id(mut self, default_id: Option<String>) -> Self {
        self.default_id = default_id;
        self
    }

    /// Display name of the default paragraph style.
    pub(crate) fn default_name(&self) -> &str {
        self.default_id
            .as_deref()
            .and_then(|id| self.names.get(id))
            .or_else(|| self.names.get(FALLBACK_DEFAULT_ID))
            .map(String::as_str)
            .unwrap_or(FALLBACK_DEFAULT_NAME)
    }

    /// Display name for a paragraph's style id.
    ///
    /// A missing id, or one the styles part does not declare, resolves to
    /// the default paragraph style.
    pub(crate) fn resolve(&self, style_id: Option<&str>) -> &str {
        match style_id {
            Some(id) => match self.names.get(id) {
                Some(name) => name.as_str(),
                None => {
                    log::warn!("Paragraph style '{id}' is not declared, using default style");
                    self.default_name()
                }
            },
            None => self.default_name(),
        }
    }

    /// Resolve the style of a docx-rs paragraph.
    pub(crate) fn paragraph_style(&self, para: &docx_rs::Paragraph) -> String {
        let style_id = para.property.style.as_ref().map(|style| style.val.as_str());
        self.resolve(style_id).to_string()
    }
}

/// docx-rs keeps the name private; its serialized form is the plain string.
fn style_display_name(name: &docx_rs::Name) -> Option<String> {
    serde_json::to_value(name)
        .ok()
        .and_then(|value| value.as_str().map(str::to_owned))
}

/// Map Word's internal lowercase built-in names to their UI spelling.
fn ui_style_name(name: &str) -> String {
    match name {
        "caption" => "Caption".to_string(),
        "footer" => "Footer".to_string(),
        "header" => "Header".to_string(),
        _ => match name.strip_prefix("heading ") {
            Some(level) if level.len() == 1 && matches!(level.as_bytes()[0], b'1'..=b'9') => {
                format!("Heading {level}")
            }
            _ => name.to_string(),
        },
    }
}

/// Find the id of the paragraph style flagged `w:default` in `word/styles.xml`.
///
/// docx-rs does not keep the default flag, so the part is scanned directly.
pub(crate) fn default_paragraph_style_id(styles_xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(styles_xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.local_name().as_ref() == b"style" =>
            {
                let mut is_paragraph = false;
                let mut is_default = false;
                let mut style_id = None;

                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value);
                    match attr.key.local_name().as_ref() {
                        b"type" => is_paragraph = value == "paragraph",
                        b"default" => is_default = matches!(&*value, "1" | "true" | "on"),
                        b"styleId" => style_id = Some(value.into_owned()),
                        _ => {}
                    }
                }

                if is_paragraph && is_default {
                    if let Some(style_id) = style_id {
                        return Some(style_id);
                    }
                }
            }
            Ok(Event::Eof) => return None,
            Err(e) => {
                log::warn!("Error reading styles part: {e}");
                return None;
            }
            _ => {}
        }
    }
}
