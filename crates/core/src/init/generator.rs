//! File generation for `.article-forge` initialization.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates};
use crate::config::{CONFIG_DIR, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for initializing a `.article-forge` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory in which `.article-forge` will be created.
    pub target_dir: PathBuf,

    /// Overwrite an existing `config.toml`.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Write the embedded templates into `<target_dir>/.article-forge/`.
///
/// ```text
/// .article-forge/
/// └── config.toml
/// ```
///
/// # Returns
/// The path of the written `config.toml`.
///
/// # Errors
/// - `ConfigExists` if `config.toml` is already there and `force` is off
/// - `TemplateNotFound` / `DirectoryCreate` / `FileWrite` on I/O problems
pub async fn generate_config(options: InitOptions) -> InitResult<PathBuf> {
    let config_dir = options.target_dir.join(CONFIG_DIR);
    let config_path = config_dir.join(CONFIG_FILE);

    if config_path.exists() && !options.force {
        return Err(InitError::ConfigExists(config_path));
    }

    fs::create_dir_all(&config_dir).map_err(|source| InitError::DirectoryCreate {
        path: config_dir.clone(),
        source,
    })?;

    for template_path in list_templates("") {
        write_template_file(&config_dir, &template_path)?;
    }

    if !config_path.exists() {
        return Err(InitError::TemplateNotFound(CONFIG_FILE.to_string()));
    }

    info!(path = %config_path.display(), "Wrote default configuration");
    Ok(config_path)
}

/// Write one template below `config_dir`, creating parent directories.
fn write_template_file(config_dir: &Path, template_path: &str) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = config_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path,
        source,
    })?;

    Ok(())
}
