//! Frame command implementation
//!
//! Renders a single frame to a PNG file and prints its pixel hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use zorn_engine::Renderer;
use zorn_raster::{surface_hash, write_surface, PngConfig, Surface};

use crate::input::RunInput;

/// Run the frame command
///
/// # Arguments
/// * `input` - Loaded notes and configuration
/// * `index` - Frame number to render
/// * `out_path` - PNG file to write
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: RunInput, index: usize, out_path: &str) -> Result<ExitCode> {
    let RunInput { notes, config } = input;
    let mut renderer = Renderer::new(notes, &config).context("Cannot render note list")?;

    if index >= renderer.total_frames() {
        log::warn!(
            "frame {} is past the end of the piece ({} frames)",
            index,
            renderer.total_frames()
        );
    }

    let frame = renderer.render_frame(index);
    let surface = Surface::render_frame(&frame, config.width, config.height)?;
    write_surface(&surface, Path::new(out_path), &PngConfig::default())
        .with_context(|| format!("Failed to write frame: {}", out_path))?;

    println!(
        "{} frame {} at {:.3}s ({} intents)",
        "Rendered:".cyan().bold(),
        frame.index,
        frame.time,
        frame.intents.len()
    );
    println!("{} {}", "Output:".dimmed(), out_path);
    println!("{} {}", "Hash:".dimmed(), surface_hash(&surface));

    Ok(ExitCode::SUCCESS)
}
