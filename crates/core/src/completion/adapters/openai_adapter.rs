//! OpenAI-compatible completion adapter.
//!
//! Talks to the legacy `POST {base_url}/completions` endpoint, which takes a
//! single prompt string and answers with `choices[].text`. Any server that
//! speaks the same shape (proxies, local gateways) works as well.

use crate::completion::base::{CompletionError, CompletionRequest, CompletionService};
use af_protocol::ServiceConfig;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use tracing::warn;

/// Completion adapter for OpenAI-style HTTP endpoints.
#[derive(Clone)]
pub struct OpenAiCompletionService {
    /// Base URL without the trailing `/completions`.
    base_url: String,
    /// Bearer token. `None` makes every call fail with an auth error.
    api_key: Option<String>,
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiCompletionService {
    /// Create a new adapter.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create from `ServiceConfig`, reading the key from the configured
    /// environment variable.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            warn!(
                env = %config.api_key_env,
                "No API key found; completion calls will fail until it is set"
            );
        }

        Self::new(config.base_url.clone(), api_key)
    }

    fn completions_url(&self) -> String {
        format!("{}/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletionService {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::Auth("no API key configured".to_string()))?;

        let url = self.completions_url();
        debug!(
            %url,
            model = %request.model,
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        if !status.is_success() {
            let error = CompletionError::from_status(status.as_u16(), error_message(&body));
            warn!(status = status.as_u16(), %error, "Completion request rejected");
            return Err(error);
        }

        parse_completion_text(&body)
    }
}

/// Extract `choices[0].text` from a successful response body.
fn parse_completion_text(body: &str) -> Result<String, CompletionError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| CompletionError::MalformedResponse("response contained no choices".to_string()))
}

/// Prefer the service's own `error.message`, fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
