//! Article generation engine.
//!
//! The GenerationEngine runs the two completion calls for one submission
//! in order (outline, then article) and reports progress as IPC events.

pub mod client;

pub use client::{
    article_prompt, outline_prompt, GenerationClient, GenerationError, ARTICLE_MAX_TOKENS,
    ARTICLE_PROMPT_PREFIX, OUTLINE_MAX_TOKENS,
};

use af_protocol::ipc::{Event, GenerationId};
use af_protocol::request_models::GenerationRequest;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

/// Runs one outline → article generation at a time.
pub struct GenerationEngine {
    client: GenerationClient,
}

impl GenerationEngine {
    /// Create a new GenerationEngine on top of the given client.
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Execute a generation and return the final article.
    ///
    /// This method:
    /// 1. Emits `GenerationStarted`
    /// 2. Requests the outline and emits `OutlineReady`
    /// 3. Feeds the outline into the article request and emits `ArticleReady`
    ///
    /// If either call fails, `GenerationFailed` is emitted and no further
    /// call is made. In particular a failed outline is never passed on as
    /// if it were outline text.
    ///
    /// # Errors
    ///
    /// Returns the `GenerationError` of the failing call.
    pub async fn run(
        &self,
        id: GenerationId,
        request: &GenerationRequest,
        events_tx: &UnboundedSender<Event>,
    ) -> Result<String, GenerationError> {
        info!(id, title = %request.title, "Generation started");
        let _ = events_tx.send(Event::GenerationStarted { id });

        let result = self.run_steps(id, request, events_tx).await;

        match &result {
            Ok(article) => {
                info!(id, chars = article.chars().count(), "Article ready");
                let _ = events_tx.send(Event::ArticleReady {
                    id,
                    article: article.clone(),
                    completed_at: chrono::Utc::now(),
                });
            }
            Err(error) => {
                warn!(id, %error, "Generation failed");
                let _ = events_tx.send(Event::GenerationFailed {
                    id,
                    stage: error.stage,
                    kind: error.kind(),
                    detail: error.detail(),
                });
            }
        }

        result
    }

    async fn run_steps(
        &self,
        id: GenerationId,
        request: &GenerationRequest,
        events_tx: &UnboundedSender<Event>,
    ) -> Result<String, GenerationError> {
        let outline = self
            .client
            .generate_outline(
                &request.title,
                &request.notes,
                &request.tag_line(),
                request.temperature,
            )
            .await?;

        let _ = events_tx.send(Event::OutlineReady {
            id,
            outline: outline.clone(),
        });

        self.client
            .generate_article(&outline, request.temperature)
            .await
    }
}
