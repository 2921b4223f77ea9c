//! Single-slot generation worker.
//!
//! One long-lived task owns the [`GenerationEngine`] and processes `Op`s
//! one by one. The [`WorkerHandle`] used by the UI allocates generation
//! ids and refuses a new submission while another one is queued or
//! running, so at most one generation is ever in flight.

use crate::engine::GenerationEngine;
use af_protocol::ipc::{Event, GenerationId, Op};
use af_protocol::request_models::GenerationRequest;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A generation is already in progress")]
    Busy,
    #[error("The generation worker has stopped")]
    Closed,
}

/// Handle for submitting work to the worker.
#[derive(Clone, Debug)]
pub struct WorkerHandle {
    ops_tx: mpsc::Sender<Op>,
    in_flight: Arc<AtomicBool>,
    next_id: Arc<AtomicU64>,
}

impl WorkerHandle {
    /// Queue a generation.
    ///
    /// # Returns
    ///
    /// The id that every event of this generation will carry.
    ///
    /// # Errors
    ///
    /// `SubmitError::Busy` while another generation is in flight,
    /// `SubmitError::Closed` once the worker has stopped.
    pub fn submit(&self, request: GenerationRequest) -> Result<GenerationId, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        match self.ops_tx.try_send(Op::Generate { id, request }) {
            Ok(()) => {
                debug!(id, "Generation queued");
                Ok(id)
            }
            Err(error) => {
                self.in_flight.store(false, Ordering::Release);
                Err(match error {
                    TrySendError::Full(_) => SubmitError::Busy,
                    TrySendError::Closed(_) => SubmitError::Closed,
                })
            }
        }
    }

    /// Whether a generation is queued or running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Ask the worker to stop after the current generation.
    pub async fn shutdown(&self) {
        let _ = self.ops_tx.send(Op::Shutdown).await;
    }
}

/// The background task draining the op queue.
pub struct GenerationWorker {
    engine: GenerationEngine,
    ops_rx: mpsc::Receiver<Op>,
    events_tx: mpsc::UnboundedSender<Event>,
    in_flight: Arc<AtomicBool>,
}

impl GenerationWorker {
    /// Spawn the worker on the current tokio runtime.
    ///
    /// # Arguments
    ///
    /// * `engine` - The engine running each generation
    /// * `events_tx` - Channel for sending events to the UI
    pub fn spawn(
        engine: GenerationEngine,
        events_tx: mpsc::UnboundedSender<Event>,
    ) -> (WorkerHandle, JoinHandle<()>) {
        // Capacity 1: together with `in_flight` this is the single slot.
        let (ops_tx, ops_rx) = mpsc::channel(1);
        let in_flight = Arc::new(AtomicBool::new(false));

        let worker = Self {
            engine,
            ops_rx,
            events_tx,
            in_flight: Arc::clone(&in_flight),
        };
        let join = tokio::spawn(worker.run());

        let handle = WorkerHandle {
            ops_tx,
            in_flight,
            next_id: Arc::new(AtomicU64::new(0)),
        };
        (handle, join)
    }

    async fn run(mut self) {
        while let Some(op) = self.ops_rx.recv().await {
            match op {
                Op::Generate { id, request } => {
                    // Failures are already reported as events by the engine.
                    let _ = self.engine.run(id, &request, &self.events_tx).await;
                    self.in_flight.store(false, Ordering::Release);
                }
                Op::Shutdown => break,
            }
        }
        info!("Generation worker stopped");
    }
}
