//! Text Extractor — raw upload bytes to plain resume text.
//!
//! Two variants selected by the file extension: PDF (page text joined in
//! page order) and DOCX (paragraph text joined in document order). Both
//! trim the result. An empty string is a valid result, not an error.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub mod docx;
pub mod pdf;

/// The two accepted upload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

#[derive(Debug, Error)]
#[error("Unsupported file format for '{file_name}'. Please upload a PDF or DOCX file.")]
pub struct UnsupportedFormat {
    pub file_name: String,
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Extraction aborted: {0}")]
    Aborted(String),
}

impl DocumentFormat {
    /// Picks the format from the file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, UnsupportedFormat> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(UnsupportedFormat {
                file_name: file_name.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("pdf"),
            DocumentFormat::Docx => f.write_str("docx"),
        }
    }
}

/// Extraction seam. Implementations must be pure functions of their input.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, payload: &[u8], format: DocumentFormat) -> Result<String, ExtractionError>;
}

/// Default extractor dispatching to the PDF and DOCX readers.
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, payload: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
        match format {
            DocumentFormat::Pdf => pdf::extract_pdf_text(payload),
            DocumentFormat::Docx => docx::extract_docx_text(payload),
        }
    }
}
