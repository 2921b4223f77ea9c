//! # af-protocol
//!
//! Core data model and protocol definitions for article-forge.
//!
//! This crate defines all shared data structures used for:
//! - Configuration file parsing (`.article-forge/config.toml`)
//! - Generation requests and their results
//! - Asynchronous communication between the TUI and the Core
//!
//! ## Modules
//!
//! - [`config_models`]: Settings from `config.toml`
//! - [`request_models`]: The user's title/tags/notes as a generation request
//! - [`result_models`]: Outline, article and failure results
//! - [`ipc`]: Operations and Events for Core-TUI communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde and chrono
//! - Independent compilation: no dependencies on other article-forge crates

pub mod config_models;
pub mod ipc;
pub mod request_models;
pub mod result_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use ipc::*;
pub use request_models::*;
pub use result_models::*;
