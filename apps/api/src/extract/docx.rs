use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use tracing::debug;

use super::ExtractionError;

/// Joins the body paragraphs with newlines and trims the result.
pub fn extract_docx_text(docx_bytes: &[u8]) -> Result<String, ExtractionError> {
    let paragraphs = paragraph_texts(docx_bytes)?;

    debug!("Extracted {} DOCX paragraphs", paragraphs.len());

    Ok(paragraphs.join("\n").trim().to_string())
}

/// Text of every top-level body paragraph, in document order, untrimmed.
/// Table cells are skipped.
pub fn paragraph_texts(docx_bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let docx = docx_rs::read_docx(docx_bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    Ok(docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect())
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let docx = create_docx(&["Line1", "", "Line2"]);
        assert_eq!(extract_docx_text(&docx).unwrap(), "Line1\n\nLine2");
    }

    #[test]
    fn test_paragraph_texts_in_document_order() {
        let docx = create_docx(&["Jane Doe", "Software Engineer", "Rust"]);
        assert_eq!(
            paragraph_texts(&docx).unwrap(),
            vec!["Jane Doe", "Software Engineer", "Rust"]
        );
    }

    #[test]
    fn test_runs_concatenate_within_paragraph() {
        let docx = pack(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Jane"))
                    .add_run(Run::new().add_text(" Doe")),
            ),
        );
        assert_eq!(extract_docx_text(&docx).unwrap(), "Jane Doe");
    }

    #[test]
    fn test_leading_and_trailing_blank_paragraphs_trimmed() {
        let docx = create_docx(&["", "Body", ""]);
        assert_eq!(extract_docx_text(&docx).unwrap(), "Body");
    }

    #[test]
    fn test_table_cells_are_not_paragraphs() {
        let docx = create_docx_with_table("Before", "InCell", "After");
        assert_eq!(extract_docx_text(&docx).unwrap(), "Before\nAfter");
    }

    #[test]
    fn test_empty_document_extracts_empty() {
        let docx = create_docx(&[]);
        assert_eq!(extract_docx_text(&docx).unwrap(), "");
    }

    #[test]
    fn test_malformed_docx_fails() {
        let result = extract_docx_text(b"PK\x03\x04 truncated zip");
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }
}
