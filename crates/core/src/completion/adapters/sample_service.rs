//! Offline sample completion service.
//!
//! Used for the `sample` provider (no network, no credentials) and as the
//! scripted mock in tests. Replies are taken from a queue; once the queue
//! is empty every call returns the fallback text. Every request is recorded
//! so tests can inspect the exact prompts that were sent.

use crate::completion::base::{CompletionError, CompletionRequest, CompletionService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Reply used when no scripted response is left.
pub const SAMPLE_TEXT: &str = "Sample generated article text.";

#[derive(Clone)]
pub struct SampleCompletionService {
    replies: Arc<Mutex<VecDeque<Result<String, CompletionError>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    fallback: String,
    delay: Option<Duration>,
}

impl Default for SampleCompletionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleCompletionService {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fallback: SAMPLE_TEXT.to_string(),
            delay: None,
        }
    }

    /// Answer calls in order with the given replies.
    pub fn with_replies(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Self::new()
        }
    }

    /// A service whose every call fails with `error`.
    pub fn failing(error: CompletionError) -> Self {
        Self::with_replies(vec![Err(error.clone()), Err(error)])
    }

    /// Sleep before answering, to make the loading phase visible.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl CompletionService for SampleCompletionService {
    fn name(&self) -> &'static str {
        "sample"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().await.push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.replies.lock().await.pop_front();
        scripted.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
