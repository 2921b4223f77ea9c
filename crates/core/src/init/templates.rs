//! Embedded template files for `.article-forge` initialization.
//!
//! `rust-embed` bakes the crate's `templates/` directory into the binary,
//! so `article-forge init` works without any files next to the executable.
//! With the `debug-embed` feature the files are embedded in debug builds
//! too, which keeps tests independent of the working directory.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct TemplateAssets;

/// Get template file content by path (e.g. `"config.toml"`).
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all embedded template paths starting with `prefix`.
pub fn list_templates(prefix: &str) -> Vec<String> {
    TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect()
}
