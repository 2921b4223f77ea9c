//! Generation client: prompt construction and the two completion calls.

use crate::completion::base::{CompletionError, CompletionRequest, CompletionService};
use af_protocol::{normalize_tags, FailureKind, GenerationStage};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Token budget of the outline call.
pub const OUTLINE_MAX_TOKENS: u32 = 200;

/// Token budget of the article call.
pub const ARTICLE_MAX_TOKENS: u32 = 800;

/// Phrase that introduces the outline inside the article prompt.
pub const ARTICLE_PROMPT_PREFIX: &str = "Write a detailed article based on the following outline:";

/// A failed completion call, tagged with the step it belongs to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} generation failed: {source}")]
pub struct GenerationError {
    pub stage: GenerationStage,
    #[source]
    pub source: CompletionError,
}

impl GenerationError {
    pub fn kind(&self) -> FailureKind {
        self.source.kind()
    }

    /// The underlying cause without the stage prefix.
    pub fn detail(&self) -> String {
        self.source.to_string()
    }
}

/// Build the outline prompt. Inputs are embedded verbatim.
pub fn outline_prompt(title: &str, tag_line: &str, notes: &str) -> String {
    format!(
        "Title: {title}\nTags: {tag_line}\nNotes: {notes}\n\nCreate a detailed outline for an article based on the above information:"
    )
}

/// Build the article prompt around an outline, embedded verbatim.
pub fn article_prompt(outline: &str) -> String {
    format!("{ARTICLE_PROMPT_PREFIX}\n{outline}\n")
}

/// Thin client issuing the outline and article calls against one service.
#[derive(Clone)]
pub struct GenerationClient {
    service: Arc<dyn CompletionService>,
    model: String,
}

impl GenerationClient {
    pub fn new(service: Arc<dyn CompletionService>, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    /// Ask for an outline.
    ///
    /// `tags` is the raw comma-separated field; each piece is trimmed and
    /// the pieces are re-joined with `", "`. Callers without a preference
    /// pass [`af_protocol::DEFAULT_TEMPERATURE`].
    pub async fn generate_outline(
        &self,
        title: &str,
        notes: &str,
        tags: &str,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let prompt = outline_prompt(title, &normalize_tags(tags), notes);
        self.complete(GenerationStage::Outline, prompt, OUTLINE_MAX_TOKENS, temperature)
            .await
    }

    /// Expand an outline into the full article.
    pub async fn generate_article(
        &self,
        outline: &str,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let prompt = article_prompt(outline);
        self.complete(GenerationStage::Article, prompt, ARTICLE_MAX_TOKENS, temperature)
            .await
    }

    async fn complete(
        &self,
        stage: GenerationStage,
        prompt: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        debug!(%stage, service = self.service.name(), prompt_len = prompt.len(), "Requesting completion");

        let request = CompletionRequest::new(self.model.clone(), prompt, max_tokens, temperature);
        self.service
            .complete(&request)
            .await
            .map(|text| text.trim().to_string())
            .map_err(|source| GenerationError { stage, source })
    }
}
