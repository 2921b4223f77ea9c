//! Configuration file loader for the `.article-forge/` directory.
//!
//! Only one file is read: `.article-forge/config.toml`. A missing directory
//! or file is not an error; defaults are used instead.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use af_protocol::config_models::GlobalConfig;
use std::path::Path;
use tracing::debug;

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".article-forge";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Loads configuration from `<root>/.article-forge/config.toml`.
///
/// # Arguments
///
/// * `root` - Directory containing the `.article-forge/` folder
///
/// # Returns
///
/// An `AppConfig` with the parsed settings, or defaults if the directory or
/// file does not exist.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file exists but cannot be read
/// - The file is not valid TOML or has mistyped fields
/// - A value is out of range (zero animation interval, empty base URL or
///   model, temperature outside `0.0..=2.0`)
///
/// # Example
///
/// ```rust,no_run
/// use af_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Provider: {:?}", config.service().provider);
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let global: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    if let Err(reason) = validate(&global) {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason,
        });
    }

    debug!(path = %config_path.display(), "Loaded config file");
    Ok(AppConfig {
        global,
        source: Some(config_path),
    })
}

fn validate(config: &GlobalConfig) -> Result<(), String> {
    let service = &config.service;
    if service.base_url.trim().is_empty() {
        return Err("service.base_url must not be empty".to_string());
    }
    if service.model.trim().is_empty() {
        return Err("service.model must not be empty".to_string());
    }
    if !(0.0..=2.0).contains(&service.temperature) {
        return Err(format!(
            "service.temperature must be between 0.0 and 2.0, got {}",
            service.temperature
        ));
    }

    let animation = &config.animation;
    if animation.loading_interval_ms == 0 {
        return Err("animation.loading_interval_ms must be greater than zero".to_string());
    }
    if animation.typing_interval_ms == 0 {
        return Err("animation.typing_interval_ms must be greater than zero".to_string());
    }

    Ok(())
}
