//! Initialization module for creating the `.article-forge` directory.
//!
//! This module writes a commented default `config.toml` so the settings
//! are discoverable without reading the docs.
//!
//! # Example
//!
//! ```no_run
//! use af_core::init::{InitOptions, generate_config};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! let written = generate_config(options).await?;
//! println!("Wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_config, InitOptions};
pub use templates::{get_template, list_templates};
