use docx_outline::document::{
    decode_paragraphs, extract_bytes, extract_upload, flatten, load_document, summarize,
};
use docx_outline::{Error, ExtractionResult};
use docx_rs::{Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow};
use std::io::Cursor;

fn styled(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style_id)
}

fn plain(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn with_styles(docx: Docx) -> Docx {
    docx.add_style(Style::new("Normal", StyleType::Paragraph).name("Normal"))
        .add_style(Style::new("Title", StyleType::Paragraph).name("Title"))
        .add_style(Style::new("Subtitle", StyleType::Paragraph).name("Subtitle"))
        .add_style(Style::new("Heading1", StyleType::Paragraph).name("Heading 1"))
        .add_style(Style::new("Heading2", StyleType::Paragraph).name("Heading 2"))
        .add_style(Style::new("Heading3", StyleType::Paragraph).name("Heading 3"))
}

fn pack(docx: Docx) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("Failed to pack test document");
    cursor.into_inner()
}

fn essay_docx() -> Vec<u8> {
    let docx = with_styles(Docx::new())
        .add_paragraph(styled("Annual Essay", "Title"))
        .add_paragraph(Paragraph::new())
        .add_paragraph(styled("Introduction", "Heading1"))
        .add_paragraph(plain("This essay has words"))
        .add_table(Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(plain("cell text")),
        ])]))
        .add_paragraph(styled("Background", "Heading2"))
        .add_paragraph(styled("A subtitle", "Subtitle"))
        .add_paragraph(styled("Conclusion", "Heading1"));
    pack(docx)
}

#[test]
fn test_decode_resolves_style_names() {
    let paragraphs = decode_paragraphs(&essay_docx()).expect("Failed to decode test document");

    // The table is not a body paragraph and takes no position
    assert_eq!(paragraphs.len(), 7);
    assert_eq!(paragraphs[0].style_name, "Title");
    assert_eq!(paragraphs[1].raw_text.trim(), "");
    assert_eq!(paragraphs[2].style_name, "Heading 1");
    assert_eq!(paragraphs[3].style_name, "Normal");
    assert_eq!(paragraphs[4].style_name, "Heading 2");
    assert!(paragraphs.iter().all(|p| p.raw_text != "cell text"));
}

#[test]
fn test_extracts_paragraphs_and_outline() {
    let result = extract_bytes(&essay_docx()).expect("Failed to extract test document");

    let ids: Vec<usize> = result.paragraphs.iter().map(|p| p.sequence_index).collect();
    assert_eq!(ids, vec![0, 2, 3, 4, 5, 6]);
    assert_eq!(result.paragraph_count, 6);
    assert_eq!(result.paragraphs[2].word_count, "Thisessayhaswords".len());
    assert_eq!(
        result.total_word_count,
        result.paragraphs.iter().map(|p| p.word_count).sum::<usize>()
    );

    let outline: Vec<(usize, u32, &str)> = result
        .outline_flat
        .iter()
        .map(|h| (h.sequence_index, h.level, h.style_label.as_str()))
        .collect();
    assert_eq!(
        outline,
        vec![
            (0, 0, "Title"),
            (2, 1, "Heading 1"),
            (4, 2, "Heading 2"),
            (6, 1, "Heading 1"),
        ]
    );

    assert_eq!(result.outline_tree.len(), 1);
    let title = &result.outline_tree[0];
    assert_eq!(title.text, "Annual Essay");
    assert_eq!(title.children.len(), 2);
    assert_eq!(title.children[0].children[0].text, "Background");
    assert_eq!(flatten(&result.outline_tree), result.outline_flat);
}

#[test]
fn test_word_internal_heading_names() {
    // Word writes built-in heading names in lowercase; localized Word also
    // uses numeric style ids
    let docx = Docx::new()
        .add_style(Style::new("a", StyleType::Paragraph).name("Normal"))
        .add_style(Style::new("a3", StyleType::Paragraph).name("Title"))
        .add_style(Style::new("1", StyleType::Paragraph).name("heading 1"))
        .add_style(Style::new("2", StyleType::Paragraph).name("heading 2"))
        .add_paragraph(styled("课程报告", "a3"))
        .add_paragraph(styled("引言", "1"))
        .add_paragraph(styled("背景", "2"))
        .add_paragraph(styled("正文", "a"));
    let result = extract_bytes(&pack(docx)).expect("Failed to extract test document");

    let outline: Vec<(u32, &str)> = result
        .outline_flat
        .iter()
        .map(|h| (h.level, h.style_label.as_str()))
        .collect();
    assert_eq!(outline, vec![(0, "Title"), (1, "Heading 1"), (2, "Heading 2")]);
    assert_eq!(result.outline_tree.len(), 1);
    assert_eq!(result.outline_tree[0].children[0].children[0].text, "背景");
}

#[test]
fn test_undeclared_style_is_not_a_heading() {
    let docx = Docx::new()
        .add_paragraph(styled("Looks like a heading", "CustomHeading"))
        .add_paragraph(plain("body"));
    let result = extract_bytes(&pack(docx)).expect("Failed to extract test document");

    assert_eq!(result.paragraph_count, 2);
    assert!(result.outline_flat.is_empty());
    assert!(result.outline_tree.is_empty());
}

#[test]
fn test_logographic_text_counts_characters() {
    let docx = with_styles(Docx::new())
        .add_paragraph(styled("第一章 绪论", "Heading1"))
        .add_paragraph(plain("文档结构解析"));
    let result = extract_bytes(&pack(docx)).expect("Failed to extract test document");

    assert_eq!(result.paragraphs[0].word_count, 5);
    assert_eq!(result.paragraphs[1].word_count, 6);
    assert_eq!(result.total_word_count, 11);
}

#[test]
fn test_empty_document_gives_empty_result() {
    let result = extract_bytes(&pack(Docx::new())).expect("Failed to extract empty document");
    assert_eq!(result, ExtractionResult::default());
}

#[test]
fn test_undecodable_bytes_are_a_decode_error() {
    let err = extract_bytes(b"PK\x03\x04 definitely not a document").unwrap_err();
    assert!(matches!(err, Error::DocumentDecode(_)), "unexpected error: {err}");
}

#[test]
fn test_upload_requires_docx_name() {
    let bytes = essay_docx();
    let err = extract_upload("essay.pdf", &bytes).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));

    let result = extract_upload("essay.docx", &bytes).expect("Failed to extract upload");
    assert_eq!(summarize(&result).heading_count, 4);
}

#[test]
fn test_persisted_blob_round_trips() {
    let result = extract_bytes(&essay_docx()).expect("Failed to extract test document");
    let blob = result.to_json().expect("Failed to serialize result");

    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    for key in ["total_words_count", "paragraph_count", "paragraphs", "outline", "outline_tree"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["paragraphs"][0]["id"], 0);
    assert_eq!(value["outline"][1]["style"], "Heading 1");

    assert_eq!(ExtractionResult::from_json(&blob).unwrap(), result);
}

#[tokio::test]
async fn test_load_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("essay.docx");
    std::fs::write(&path, essay_docx()).unwrap();

    let result = load_document(&path).await.expect("Failed to load test document");
    assert_eq!(result.outline_flat.len(), 4);
}

#[tokio::test]
async fn test_load_document_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("essay.zip");
    std::fs::write(&path, essay_docx()).unwrap();

    let err = load_document(&path).await.unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
}
