//! Loading notes and render configuration for a command.

use anyhow::{Context, Result};
use std::path::Path;
use zorn_spec::{load_config, load_notes, BrushModel, Note, RenderConfig};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub fps: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub seed: Option<u32>,
    pub brush: Option<BrushModel>,
}

impl ConfigOverrides {
    /// Apply every override that is set.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(brush) = self.brush {
            config.brush = brush;
        }
    }
}

/// Notes and configuration for one run.
#[derive(Debug, Clone)]
pub struct RunInput {
    pub notes: Vec<Note>,
    pub config: RenderConfig,
}

/// Load the note list, then the config file (or defaults), then overrides.
pub fn load_input(
    notes_path: &str,
    config_path: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<RunInput> {
    let notes = load_notes(Path::new(notes_path))
        .with_context(|| format!("Failed to load notes file: {}", notes_path))?;

    let mut config = match config_path {
        Some(path) => load_config(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => RenderConfig::default(),
    };
    overrides.apply(&mut config);

    Ok(RunInput { notes, config })
}
