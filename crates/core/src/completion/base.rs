//! Base CompletionService trait and supporting types.

use af_protocol::FailureKind;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// One request to a text-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier understood by the service.
    pub model: String,

    /// Full prompt text.
    pub prompt: String,

    /// Upper bound on generated tokens.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a new request.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens,
            temperature,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Quota exceeded: {0}")]
    Quota(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },
}

impl CompletionError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => CompletionError::Auth(message),
            429 => CompletionError::Quota(message),
            _ => CompletionError::Service { status, message },
        }
    }

    /// The protocol-level failure kind.
    pub fn kind(&self) -> FailureKind {
        match self {
            CompletionError::Network(_) => FailureKind::Network,
            CompletionError::Auth(_) => FailureKind::Auth,
            CompletionError::Quota(_) => FailureKind::Quota,
            CompletionError::MalformedResponse(_) => FailureKind::MalformedResponse,
            CompletionError::Service { .. } => FailureKind::Service,
        }
    }
}

/// A text-completion backend.
///
/// Implementations return the raw completion text; trimming and prompt
/// construction happen in [`crate::engine`].
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
