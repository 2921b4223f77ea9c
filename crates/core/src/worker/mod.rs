//! Background generation worker.
//!
//! This module provides the single worker task that runs generations off
//! the UI task, and the handle used to submit work to it.

pub mod manager;

pub use manager::{GenerationWorker, SubmitError, WorkerHandle};
