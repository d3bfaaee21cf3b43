//! Note records and guitar technique tags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Pitch used when a note omits `pitch` (middle C).
pub const DEFAULT_PITCH: i32 = 60;

/// Duration in seconds used when a note omits `duration`.
pub const DEFAULT_DURATION: f64 = 0.5;

/// Velocity used when a note omits `velocity_value`.
pub const DEFAULT_VELOCITY: f64 = 0.5;

/// Playing technique attached to a note.
///
/// Unknown tags decode as [`Technique::Regular`], so a note list produced by a
/// newer transcriber still renders with the default painterly treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum Technique {
    #[default]
    Regular,
    Legato,
    Staccato,
    Bend,
    Slide,
    Vibrato,
}

impl Technique {
    /// Parse a technique tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "regular" => Some(Technique::Regular),
            "legato" => Some(Technique::Legato),
            "staccato" => Some(Technique::Staccato),
            "bend" => Some(Technique::Bend),
            "slide" => Some(Technique::Slide),
            "vibrato" => Some(Technique::Vibrato),
            _ => None,
        }
    }

    /// Returns the tag as it appears in note JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::Regular => "regular",
            Technique::Legato => "legato",
            Technique::Staccato => "staccato",
            Technique::Bend => "bend",
            Technique::Slide => "slide",
            Technique::Vibrato => "vibrato",
        }
    }
}

impl From<Option<String>> for Technique {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref()
            .and_then(Technique::parse)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single transcribed note.
///
/// Fields other than `start_time` may be absent; use the accessor methods to
/// read them with their defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// MIDI-style semitone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<i32>,
    /// Onset in seconds.
    pub start_time: f64,
    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Normalized loudness in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity_value: Option<f64>,
    #[serde(default)]
    pub technique: Technique,
}

impl Note {
    /// Creates a fully specified regular note.
    pub fn new(pitch: i32, start_time: f64, duration: f64, velocity: f64) -> Self {
        Self {
            pitch: Some(pitch),
            start_time,
            duration: Some(duration),
            velocity_value: Some(velocity),
            technique: Technique::Regular,
        }
    }

    /// Sets the technique tag.
    pub fn with_technique(mut self, technique: Technique) -> Self {
        self.technique = technique;
        self
    }

    /// Pitch with the default applied.
    #[inline]
    pub fn pitch(&self) -> i32 {
        self.pitch.unwrap_or(DEFAULT_PITCH)
    }

    /// Duration with the default applied.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Velocity with the default applied.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity_value.unwrap_or(DEFAULT_VELOCITY)
    }

    /// Time at which the note stops sounding.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration()
    }
}

/// Parse a note list from a JSON string.
pub fn parse_notes(json: &str) -> Result<Vec<Note>, NoteError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a note list from a JSON file.
pub fn load_notes(path: &Path) -> Result<Vec<Note>, NoteError> {
    let content = std::fs::read_to_string(path)?;
    let notes = parse_notes(&content)?;
    log::info!("loaded {} notes from {}", notes.len(), path.display());
    Ok(notes)
}
