//! Resume Rewriter — turns extracted resume text into the fixed sectioned layout.
//!
//! The model's output is trusted verbatim: nothing here checks that the
//! requested sections actually came back.
//!
//! `FormatPipeline` holds an `Arc<dyn ResumeRewriter>`; tests swap in doubles.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

pub mod prompts;

use prompts::{RESUME_TEXT_PLACEHOLDER, REWRITE_PROMPT_TEMPLATE};

#[derive(Debug, Error)]
#[error("Resume rewrite failed: {0}")]
pub struct RewriteError(#[from] pub LlmError);

/// Embeds `text` verbatim into the rewrite template.
pub fn build_prompt(text: &str) -> String {
    REWRITE_PROMPT_TEMPLATE.replacen(RESUME_TEXT_PLACEHOLDER, text, 1)
}

#[async_trait]
pub trait ResumeRewriter: Send + Sync {
    async fn rewrite(&self, text: &str) -> Result<String, RewriteError>;
}

/// Rewriter backed by the chat-completion service. No caching: every call hits the API.
pub struct LlmRewriter {
    llm: LlmClient,
}

impl LlmRewriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeRewriter for LlmRewriter {
    async fn rewrite(&self, text: &str) -> Result<String, RewriteError> {
        let prompt = build_prompt(text);
        let structured = self
            .llm
            .complete(&prompt, ASSISTANT_SYSTEM)
            .await
            .map_err(|e| {
                if e.is_auth_failure() {
                    error!("Completion service rejected the configured API key");
                }
                RewriteError(e)
            })?;
        info!(
            input_chars = text.chars().count(),
            output_chars = structured.chars().count(),
            "Resume rewritten"
        );
        Ok(structured)
    }
}
