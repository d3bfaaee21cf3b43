//! Render configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Which brush model paints the directional base stroke of every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushModel {
    /// Fan of independent curved bristle strokes.
    #[default]
    Simple,
    /// Chained bristle simulation dragged along the stroke path.
    Bristle,
}

impl BrushModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrushModel::Simple => "simple",
            BrushModel::Bristle => "bristle",
        }
    }
}

impl FromStr for BrushModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(BrushModel::Simple),
            "bristle" => Ok(BrushModel::Bristle),
            other => Err(format!(
                "unknown brush model '{}' (expected simple or bristle)",
                other
            )),
        }
    }
}

impl std::fmt::Display for BrushModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters that stay fixed for the duration of one render run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Frames per second.
    pub fps: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Seed for the per-frame random stream and the noise table.
    pub seed: u32,
    pub brush: BrushModel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            width: 1920,
            height: 1080,
            seed: 42,
            brush: BrushModel::Simple,
        }
    }
}

/// Load a render config from a JSON file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<RenderConfig, NoteError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"fps": 24, "brush": "bristle"}"#).unwrap();
        assert_eq!(config.fps, 24);
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert_eq!(config.seed, 42);
        assert_eq!(config.brush, BrushModel::Bristle);
    }

    #[test]
    fn test_unknown_config_field_rejected() {
        let parsed: Result<RenderConfig, _> = serde_json::from_str(r#"{"framerate": 24}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_brush_model_from_str() {
        assert_eq!("simple".parse::<BrushModel>(), Ok(BrushModel::Simple));
        assert_eq!("bristle".parse::<BrushModel>(), Ok(BrushModel::Bristle));
        assert!("fan".parse::<BrushModel>().is_err());
    }
}
