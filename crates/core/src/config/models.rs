//! Configuration models that aggregate all settings.
//!
//! `AppConfig` pairs the parsed [`GlobalConfig`] with the file it came
//! from, so error messages and the UI can point at it.

use af_protocol::config_models::{AnimationConfig, GlobalConfig, ServiceConfig};
use std::path::PathBuf;

/// Unified application configuration loaded from `.article-forge/`.
///
/// # Example
///
/// ```rust,no_run
/// use af_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Using model {}", config.service().model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings from `config.toml`, or defaults.
    pub global: GlobalConfig,

    /// Path of the file the settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub fn service(&self) -> &ServiceConfig {
        &self.global.service
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.global.animation
    }
}
