//! Inter-task communication protocol.
//!
//! This module defines the message types for asynchronous communication
//! between the TUI (user interface) and the Core (generation worker).
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: Commands sent from TUI to Core
//! - `Event`: Progress and results sent from Core to TUI
//!
//! Every submission carries a [`GenerationId`]. The TUI only reacts to
//! events whose id matches its current submission, so a late answer from
//! an older request can never overwrite the screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request_models::GenerationRequest;
use crate::result_models::{FailureKind, GenerationResult, GenerationStage};

/// Monotonically increasing tag of one submission.
pub type GenerationId = u64;

/// Operations sent from the UI (TUI) to the Core logic.
///
/// ```json
/// {
///   "type": "generate",
///   "payload": { "id": 3, "request": { "title": "...", "tags": ["a"], "notes": "", "temperature": 0.7 } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Produce an outline and then an article for `request`.
    Generate {
        id: GenerationId,
        request: GenerationRequest,
    },

    /// Stop the worker once the current generation (if any) is done.
    Shutdown,
}

/// Events sent from the Core logic to the UI (TUI).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// The worker picked up a submission.
    GenerationStarted { id: GenerationId },

    /// The first call returned an outline; the article call follows.
    OutlineReady { id: GenerationId, outline: String },

    /// The article is complete.
    ArticleReady {
        id: GenerationId,
        article: String,
        completed_at: DateTime<Utc>,
    },

    /// One of the two calls failed; no further calls are made.
    GenerationFailed {
        id: GenerationId,
        stage: GenerationStage,
        kind: FailureKind,
        detail: String,
    },
}

impl Event {
    /// The submission this event belongs to.
    pub fn id(&self) -> GenerationId {
        match self {
            Event::GenerationStarted { id }
            | Event::OutlineReady { id, .. }
            | Event::ArticleReady { id, .. }
            | Event::GenerationFailed { id, .. } => *id,
        }
    }

    /// Whether no further events will follow for this id.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::ArticleReady { .. } | Event::GenerationFailed { .. }
        )
    }

    /// The result carried by this event, if any.
    pub fn result(&self) -> Option<GenerationResult> {
        match self {
            Event::GenerationStarted { .. } => None,
            Event::OutlineReady { outline, .. } => Some(GenerationResult::Outline(outline.clone())),
            Event::ArticleReady { article, .. } => Some(GenerationResult::Article(article.clone())),
            Event::GenerationFailed {
                stage,
                kind,
                detail,
                ..
            } => Some(GenerationResult::Failure {
                stage: *stage,
                kind: *kind,
                detail: detail.clone(),
            }),
        }
    }
}
