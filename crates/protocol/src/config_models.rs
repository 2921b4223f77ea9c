//! Configuration models for `.article-forge/config.toml`.
//!
//! Every field has a default so that a missing file, a missing table, or a
//! missing key all fall back to a working setup.

use serde::Deserialize;
use serde::Serialize;

/// Which completion backend to talk to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// An OpenAI-compatible `/completions` endpoint.
    #[default]
    OpenAi,
    /// Offline canned responses, no network access.
    Sample,
}

/// Represents the whole of `.article-forge/config.toml`.
///
/// # Example
///
/// ```toml
/// [service]
/// provider = "openai"
/// model = "gpt-3.5-turbo-instruct"
///
/// [animation]
/// typing_interval_ms = 30
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GlobalConfig {
    /// Completion service settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Loading and typewriter animation timings.
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Connection settings for the completion service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub provider: Provider,

    /// Base URL; `/completions` is appended.
    pub base_url: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// Sampling temperature for both calls.
    pub temperature: f32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: crate::request_models::DEFAULT_TEMPERATURE,
        }
    }
}

/// Tick periods of the two UI animations, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    pub loading_interval_ms: u64,
    pub typing_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            loading_interval_ms: 500,
            typing_interval_ms: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.animation.loading_interval_ms, 500);
        assert_eq!(config.animation.typing_interval_ms, 30);
    }

    #[test]
    fn test_partial_service_table_keeps_other_defaults() {
        let config: GlobalConfig = toml::from_str(
            r#"
[service]
provider = "sample"
model = "my-model"
"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.service.provider, Provider::Sample);
        assert_eq!(config.service.model, "my-model");
        assert_eq!(config.service.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.service.base_url, "https://api.openai.com/v1");
    }
}
