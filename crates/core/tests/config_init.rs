//! Integration tests for `init` followed by config loading.

mod common;

use af_core::completion::{CompletionService, ServiceFactory};
use af_core::config::{load_config, ConfigError};
use af_core::init::{generate_config, InitError, InitOptions};
use af_protocol::{GlobalConfig, Provider};
use common::fixtures::*;

#[tokio::test]
async fn test_init_then_load_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let path = generate_config(InitOptions {
        target_dir: dir.path().to_path_buf(),
        force: false,
    })
    .await
    .expect("init should succeed");
    assert!(path.exists());

    let config = load_config(dir.path()).await.unwrap();
    assert_eq!(config.global, GlobalConfig::default());

    let again = generate_config(InitOptions {
        target_dir: dir.path().to_path_buf(),
        force: false,
    })
    .await;
    assert!(matches!(again, Err(InitError::ConfigExists(_))));
}

#[tokio::test]
async fn test_sample_provider_from_config() {
    let project = create_test_project("[service]\nprovider = \"sample\"\n").unwrap();

    let config = load_config(project.path()).await.unwrap();
    assert_eq!(config.service().provider, Provider::Sample);

    let service = ServiceFactory::create(config.service());
    assert_eq!(service.name(), "sample");
}

#[tokio::test]
async fn test_invalid_config_reports_path() {
    let project = create_test_project("[animation]\nloading_interval_ms = 0\n").unwrap();

    match load_config(project.path()).await {
        Err(ConfigError::InvalidConfig { path, reason }) => {
            assert!(path.ends_with(".article-forge/config.toml"));
            assert!(reason.contains("loading_interval_ms"));
        }
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
}
