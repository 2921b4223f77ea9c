//! Service factory for creating completion services from configuration.

use crate::completion::adapters::OpenAiCompletionService;
use crate::completion::adapters::SampleCompletionService;
use crate::completion::base::CompletionService;
use af_protocol::{Provider, ServiceConfig};
use std::sync::Arc;
use tracing::info;

/// Factory for creating completion service instances based on configuration.
pub struct ServiceFactory;

impl ServiceFactory {
    /// Create a completion service for the configured provider.
    ///
    /// - `openai` → [`OpenAiCompletionService`], key read from `api_key_env`
    /// - `sample` → [`SampleCompletionService`], offline canned text
    ///
    /// # Examples
    ///
    /// ```
    /// use af_core::completion::{CompletionService, ServiceFactory};
    /// use af_protocol::{Provider, ServiceConfig};
    ///
    /// let config = ServiceConfig {
    ///     provider: Provider::Sample,
    ///     ..ServiceConfig::default()
    /// };
    ///
    /// let service = ServiceFactory::create(&config);
    /// assert_eq!(service.name(), "sample");
    /// ```
    pub fn create(config: &ServiceConfig) -> Arc<dyn CompletionService> {
        let service: Arc<dyn CompletionService> = match config.provider {
            Provider::OpenAi => Arc::new(OpenAiCompletionService::from_config(config)),
            Provider::Sample => Arc::new(SampleCompletionService::new()),
        };

        info!(provider = service.name(), model = %config.model, "Completion service ready");
        service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_openai_service() {
        let config = ServiceConfig::default();
        let service = ServiceFactory::create(&config);
        assert_eq!(service.name(), "openai");
    }

    #[test]
    fn test_create_sample_service() {
        let config = ServiceConfig {
            provider: Provider::Sample,
            ..ServiceConfig::default()
        };
        let service = ServiceFactory::create(&config);
        assert_eq!(service.name(), "sample");
    }
}
