//! Render command implementation
//!
//! Renders a range of frames to numbered PNG files, in parallel.

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use zorn_engine::Renderer;
use zorn_raster::{write_frame, PngConfig, Surface};

use crate::input::RunInput;

/// Frame range and output options for a render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// First frame to render.
    pub start: usize,
    /// One past the last frame to render; clamped to the piece length.
    pub end: Option<usize>,
    /// Worker threads; `None` uses every core.
    pub jobs: Option<usize>,
}

/// Resolve the requested frame range against the piece length.
pub fn frame_range(options: &RenderOptions, total_frames: usize) -> std::ops::Range<usize> {
    let end = options.end.map_or(total_frames, |end| end.min(total_frames));
    options.start.min(end)..end
}

/// Run the render command
///
/// # Arguments
/// * `input` - Loaded notes and configuration
/// * `out_dir` - Directory that receives `frame_NNNNN.png` files
/// * `options` - Frame range and parallelism
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: RunInput, out_dir: &str, options: &RenderOptions) -> Result<ExitCode> {
    let start_time = Instant::now();
    let RunInput { notes, config } = input;

    let renderer = Renderer::new(notes, &config).context("Cannot render note list")?;
    let range = frame_range(options, renderer.total_frames());

    let out_dir = Path::new(out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    println!("{} {}", "Rendering:".cyan().bold(), out_dir.display());
    println!(
        "{} {} of {} at {} fps, {}x{}, seed {}, brush {}",
        "Frames:".dimmed(),
        range.len(),
        renderer.total_frames(),
        config.fps,
        config.width,
        config.height,
        config.seed,
        config.brush
    );

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = options.jobs {
            builder = builder.num_threads(jobs);
        }
        builder.build().context("Failed to start render workers")?
    };

    let png_config = PngConfig::default();
    let written: Vec<PathBuf> = pool.install(|| {
        range
            .clone()
            .into_par_iter()
            .map_init(
                || renderer.clone(),
                |worker, index| -> Result<PathBuf> {
                    let frame = worker.render_frame(index);
                    let surface = Surface::render_frame(&frame, config.width, config.height)?;
                    let path = write_frame(&surface, out_dir, index, &png_config)?;
                    Ok(path)
                },
            )
            .collect::<Result<Vec<_>>>()
    })?;

    let duration_ms = start_time.elapsed().as_millis();
    println!(
        "\n{} Wrote {} frame(s) ({}ms)",
        "SUCCESS".green().bold(),
        written.len(),
        duration_ms
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_range_defaults_to_whole_piece() {
        assert_eq!(frame_range(&RenderOptions::default(), 90), 0..90);
    }

    #[test]
    fn test_frame_range_clamps() {
        let options = RenderOptions {
            start: 10,
            end: Some(500),
            jobs: None,
        };
        assert_eq!(frame_range(&options, 90), 10..90);

        let past = RenderOptions {
            start: 120,
            end: None,
            jobs: None,
        };
        assert!(frame_range(&past, 90).is_empty());
    }
}
