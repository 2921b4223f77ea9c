//! Configuration loading and management.
//!
//! This module loads and validates `.article-forge/config.toml`.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, CONFIG_DIR, CONFIG_FILE};
pub use models::AppConfig;
