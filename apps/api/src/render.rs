//! Document Renderer — wraps the generated resume text in a single-paragraph DOCX.
//!
//! Markdown-ish markers from the model (`**bold**`, `- bullets`) stay literal.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run};
use thiserror::Error;
use tracing::debug;

/// Download name offered to the user.
pub const OUTPUT_FILE_NAME: &str = "formatted_resume.docx";
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
#[error("Failed to write DOCX: {0}")]
pub struct RenderError(String);

/// Renders `text` as exactly one paragraph. Line endings become line breaks and
/// tabs become tab stops, so the paragraph reads back as `text` unchanged apart
/// from `\r\n` and a lone `\r`, which read back as `\n`.
pub fn render_docx(text: &str) -> Result<Vec<u8>, RenderError> {
    let docx = Docx::new().add_paragraph(Paragraph::new().add_run(text_run(text)));

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| RenderError(e.to_string()))?;

    let bytes = cursor.into_inner();
    debug!("Rendered DOCX: {} chars -> {} bytes", text.len(), bytes.len());
    Ok(bytes)
}

fn text_run(text: &str) -> Run {
    let mut run = Run::new();
    for (i, line) in lines(text).enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                run = run.add_tab();
            }
            if !segment.is_empty() {
                run = run.add_text(segment);
            }
        }
    }
    run
}

/// Splits on `\r\n`, `\r` and `\n`. A raw `\r` inside `<w:t>` is read back as `\n`.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
