//! Main entry point for the af-tui binary.
//!
//! Standalone TUI using the configuration in the current directory. The
//! `article-forge` binary offers the same UI plus `init` and `generate`.

use af_core::completion::ServiceFactory;
use af_core::config::load_config;
use af_tui::run_app;
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir()?;
    let config = load_config(&root).await?;
    let service = ServiceFactory::create(config.service());
    run_app(config, service).await
}
