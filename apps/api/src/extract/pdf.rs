use tracing::debug;

use super::ExtractionError;

/// Extracts text page by page; each page is followed by a newline and the
/// whole is trimmed. Pages without a text layer contribute an empty segment.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }

    debug!("Extracted {} chars from {} PDF pages", text.len(), pages.len());

    Ok(text.trim().to_string())
}
