//! Resume formatting pipeline.
//!
//! Flow: format check → extract (blocking pool) → rewrite (LLM) → render DOCX.
//!
//! Every stage failure aborts the remaining stages; nothing partial is returned.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

use crate::extract::{DocumentFormat, ExtractionError, TextExtractor, UnsupportedFormat};
use crate::render::{render_docx, RenderError, DOCX_MIME_TYPE, OUTPUT_FILE_NAME};
use crate::rewrite::{ResumeRewriter, RewriteError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Generated resume text together with the format it was extracted from.
#[derive(Debug, Clone)]
pub struct RewrittenResume {
    pub format: DocumentFormat,
    pub text: String,
}

/// The downloadable result of one pipeline run.
#[derive(Debug, Clone)]
pub struct FormattedResume {
    pub text: String,
    pub document: Vec<u8>,
}

impl FormattedResume {
    pub fn file_name(&self) -> &'static str {
        OUTPUT_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        DOCX_MIME_TYPE
    }
}

#[derive(Clone)]
pub struct FormatPipeline {
    extractor: Arc<dyn TextExtractor>,
    rewriter: Arc<dyn ResumeRewriter>,
}

impl FormatPipeline {
    pub fn new(extractor: Arc<dyn TextExtractor>, rewriter: Arc<dyn ResumeRewriter>) -> Self {
        Self {
            extractor,
            rewriter,
        }
    }

    /// Extracts and rewrites, returning the generated resume text.
    pub async fn preview(
        &self,
        file_name: &str,
        payload: Bytes,
    ) -> Result<RewrittenResume, PipelineError> {
        let format = DocumentFormat::from_file_name(file_name)?;
        let text = self.extract(payload, format).await?;

        if text.is_empty() {
            warn!(%format, "No extractable text; sending empty resume to rewrite");
        }

        let text = self.rewriter.rewrite(&text).await?;
        Ok(RewrittenResume { format, text })
    }

    /// Full run: extract, rewrite, render.
    pub async fn run(&self, file_name: &str, payload: Bytes) -> Result<FormattedResume, PipelineError> {
        let RewrittenResume { text, .. } = self.preview(file_name, payload).await?;
        let document = render_docx(&text)?;

        info!(bytes = document.len(), "Formatted resume rendered");

        Ok(FormattedResume { text, document })
    }

    async fn extract(&self, payload: Bytes, format: DocumentFormat) -> Result<String, ExtractionError> {
        let extractor = self.extractor.clone();
        let payload_bytes = payload.len();

        // PDF/DOCX parsing is CPU-bound; a panic in the parser surfaces as a JoinError.
        let text = tokio::task::spawn_blocking(move || extractor.extract(&payload, format))
            .await
            .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

        info!(
            %format,
            payload_bytes,
            chars = text.chars().count(),
            "Resume text extracted"
        );

        Ok(text)
    }
}
