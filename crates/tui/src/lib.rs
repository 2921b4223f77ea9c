//! # af-tui
//!
//! Terminal User Interface for article-forge.
//!
//! The form on the left collects title, tags and notes; the pane on the
//! right shows the loading caption and then types out the generated
//! article. Generations run on the `af-core` worker and come back as
//! `Event`s defined in `af-protocol`.

pub mod animation;
pub mod app;
pub mod event;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use af_core::completion::CompletionService;
use af_core::config::AppConfig;
use af_core::engine::{GenerationClient, GenerationEngine};
use af_core::worker::GenerationWorker;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Run the TUI until the user quits.
///
/// Spawns the generation worker on `service`, takes over the terminal and
/// restores it on the way out, also when the event loop fails.
pub async fn run_app(config: AppConfig, service: Arc<dyn CompletionService>) -> Result<()> {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let client = GenerationClient::new(service, config.service().model.clone());
    let (worker, _worker_task) = GenerationWorker::spawn(GenerationEngine::new(client), events_tx);

    let mut tui = Tui::init()?;
    let mut app = App::new(
        worker.clone(),
        events_rx,
        *config.animation(),
        config.service().temperature,
    );

    let result = app.run(&mut tui).await;
    tui.restore()?;

    // A generation still in flight is abandoned with the runtime.
    worker.shutdown().await;
    info!("TUI closed");
    result
}
