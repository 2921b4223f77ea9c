//! Test fixtures for creating sample requests and wired-up engines.

use af_core::completion::{CompletionError, SampleCompletionService};
use af_core::engine::{GenerationClient, GenerationEngine};
use af_core::worker::{GenerationWorker, WorkerHandle};
use af_protocol::ipc::Event;
use af_protocol::request_models::GenerationRequest;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const TEST_MODEL: &str = "test-model";

/// The request used throughout the end-to-end tests.
pub fn ocean_request() -> GenerationRequest {
    GenerationRequest::from_fields(
        "Ocean Conservation",
        "nature, water, policy",
        "focus on plastic pollution",
    )
}

/// A service that answers the outline and the article call in order.
pub fn scripted_service(outline: &str, article: &str) -> SampleCompletionService {
    SampleCompletionService::with_replies(vec![Ok(outline.to_string()), Ok(article.to_string())])
}

/// A service whose first call fails with `error`.
#[allow(dead_code)]
pub fn failing_service(error: CompletionError) -> SampleCompletionService {
    SampleCompletionService::failing(error)
}

/// Build an engine on top of a clone of `service`, so the test keeps access
/// to the recorded requests.
pub fn engine_for(service: &SampleCompletionService) -> GenerationEngine {
    GenerationEngine::new(GenerationClient::new(
        Arc::new(service.clone()),
        TEST_MODEL,
    ))
}

/// Spawn a worker for `service` and return its handle and event receiver.
#[allow(dead_code)]
pub fn spawn_worker(
    service: &SampleCompletionService,
) -> (WorkerHandle, JoinHandle<()>, mpsc::UnboundedReceiver<Event>) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (handle, join) = GenerationWorker::spawn(engine_for(service), events_tx);
    (handle, join, events_rx)
}

/// Collect events until a terminal one arrives or `timeout` elapses.
pub async fn collect_until_terminal(
    rx: &mut mpsc::UnboundedReceiver<Event>,
    timeout: Duration,
) -> Vec<Event> {
    let mut events = Vec::new();
    let start = tokio::time::Instant::now();

    while start.elapsed() < timeout {
        match tokio::time::timeout(Duration::from_millis(100), rx.recv()).await {
            Ok(Some(event)) => {
                let terminal = event.is_terminal();
                events.push(event);
                if terminal {
                    break;
                }
            }
            Ok(None) => break,
            Err(_) => continue,
        }
    }

    events
}

/// Create a temporary project directory with a `.article-forge/config.toml`.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let config_dir = temp_dir.path().join(".article-forge");
    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(config_dir.join("config.toml"), config_toml)?;
    Ok(temp_dir)
}
