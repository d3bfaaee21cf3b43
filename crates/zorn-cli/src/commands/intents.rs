//! Intents command implementation
//!
//! Prints the draw intents of one frame as JSON.

use anyhow::{Context, Result};
use std::process::ExitCode;
use zorn_engine::Renderer;

use super::write_output;
use crate::input::RunInput;

/// Run the intents command
///
/// # Arguments
/// * `input` - Loaded notes and configuration
/// * `index` - Frame number to render
/// * `output` - Output file path (default: stdout)
/// * `pretty` - Pretty-print the JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: RunInput, index: usize, output: Option<&str>, pretty: bool) -> Result<ExitCode> {
    let RunInput { notes, config } = input;
    let mut renderer = Renderer::new(notes, &config).context("Cannot render note list")?;
    let frame = renderer.render_frame(index);

    let json = if pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
    .context("Failed to serialize frame")?;

    write_output(&json, output)?;
    Ok(ExitCode::SUCCESS)
}
