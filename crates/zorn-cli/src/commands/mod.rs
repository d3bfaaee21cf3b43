//! Command implementations for the `zorn` binary.

pub mod analyze;
pub mod frame;
pub mod intents;
pub mod render;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;

/// Write `contents` to `path`, or print to stdout when no path is given.
pub(crate) fn write_output(contents: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(Path::new(path), contents)
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}
