//! # af-core
//!
//! Generation client and background worker for article-forge.
//!
//! This crate provides:
//! - Configuration loading from the `.article-forge/` directory
//! - The completion service abstraction and its adapters
//! - The two-step outline → article generation engine
//! - A single background worker that serializes submissions
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and validation
//! - [`completion`]: `CompletionService` trait and adapter implementations
//! - [`engine`]: Prompt construction and the generation engine
//! - [`worker`]: Single-slot generation worker
//! - [`init`]: Scaffolding of a default `.article-forge/` directory

pub mod completion;
pub mod config;
pub mod engine;
pub mod init;
pub mod worker;
