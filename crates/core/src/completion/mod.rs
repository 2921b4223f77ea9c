//! Completion service abstraction.
//!
//! This module provides the `CompletionService` trait (Adapter Pattern),
//! the adapters that implement it, and the factory that picks one from
//! configuration.

pub mod adapters;
pub mod base;
pub mod factory;

pub use adapters::{OpenAiCompletionService, SampleCompletionService};
pub use base::{CompletionError, CompletionRequest, CompletionService};
pub use factory::ServiceFactory;
