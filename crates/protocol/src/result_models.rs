//! Generation result models.
//!
//! The completion service can fail for many reasons (network, credentials,
//! quota, garbage responses). They are kept apart as a [`FailureKind`] so
//! the UI can render a failure differently from generated text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two completion calls a result belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStage {
    /// The first call, turning title/tags/notes into an outline.
    Outline,
    /// The second call, expanding the outline into the article.
    Article,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStage::Outline => write!(f, "outline"),
            GenerationStage::Article => write!(f, "article"),
        }
    }
}

/// Coarse classification of a failed completion call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// The request never got a response (DNS, connect, TLS, reset).
    Network,
    /// Missing or rejected credentials.
    Auth,
    /// Rate limit or exhausted quota.
    Quota,
    /// A response arrived but could not be understood.
    MalformedResponse,
    /// Any other non-success answer from the service.
    Service,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Network => "network error",
            FailureKind::Auth => "authentication error",
            FailureKind::Quota => "quota exceeded",
            FailureKind::MalformedResponse => "malformed response",
            FailureKind::Service => "service error",
        };
        f.write_str(label)
    }
}

/// Output of one completion call, consumed exactly once by the UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum GenerationResult {
    /// Intermediate outline text.
    Outline(String),
    /// Final article text.
    Article(String),
    /// The call failed; `detail` is the human-readable cause.
    Failure {
        stage: GenerationStage,
        kind: FailureKind,
        detail: String,
    },
}

impl GenerationResult {
    /// Whether this result is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationResult::Failure { .. })
    }

    /// Text to show the user: generated content, or a one-line failure report.
    pub fn display_text(&self) -> String {
        match self {
            GenerationResult::Outline(text) | GenerationResult::Article(text) => text.clone(),
            GenerationResult::Failure {
                stage,
                kind,
                detail,
            } => format!("Generation failed during {stage} ({kind}): {detail}"),
        }
    }
}
