//! Command-line front end for nine-grid segmentation.
//!
//! This crate holds the pieces of the `mandala` binary that are worth
//! testing on their own: output rendering and configuration loading.
//!
//! # Usage
//!
//! ```bash
//! # Markdown export of a file
//! cargo run -p mandala-cli -- notes.txt
//!
//! # Status report from stdin
//! pbpaste | cargo run -p mandala-cli -- --format report
//!
//! # Tighter limits, JSON into a file
//! cargo run -p mandala-cli -- notes.txt --hard-max 1000 --format json -o grid.json
//! ```

pub mod render;
pub mod settings;

pub use render::OutputFormat;
pub use settings::{Overrides, SettingsError, apply_overrides, load_config};
