//! Live test against the real completions endpoint.
//!
//! Only compiled with `--features integration-tests` and skipped unless
//! `OPENAI_API_KEY` is set:
//!
//! ```bash
//! OPENAI_API_KEY=... cargo test -p af-core --features integration-tests --test live_openai
//! ```

#![cfg(feature = "integration-tests")]

use af_core::completion::OpenAiCompletionService;
use af_core::engine::GenerationClient;
use af_protocol::{ServiceConfig, DEFAULT_TEMPERATURE};
use std::sync::Arc;

#[tokio::test]
async fn test_live_outline_and_article() {
    let config = ServiceConfig::default();
    if std::env::var(&config.api_key_env).is_err() {
        eprintln!("{} not set, skipping", config.api_key_env);
        return;
    }

    let service = Arc::new(OpenAiCompletionService::from_config(&config));
    let client = GenerationClient::new(service, config.model.clone());

    let outline = client
        .generate_outline(
            "Ocean Conservation",
            "focus on plastic pollution",
            "nature, water, policy",
            DEFAULT_TEMPERATURE,
        )
        .await
        .expect("outline call should succeed");
    assert!(!outline.is_empty());

    let article = client
        .generate_article(&outline, DEFAULT_TEMPERATURE)
        .await
        .expect("article call should succeed");
    assert!(!article.is_empty());
}
