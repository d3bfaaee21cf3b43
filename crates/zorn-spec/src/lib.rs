//! Zorn Painter Note Library
//!
//! This crate provides the input model for the Zorn painter: the note list
//! that drives a render, the render configuration, and the validation that
//! runs before any frame is produced.
//!
//! # Overview
//!
//! - **Notes**: a JSON array of `{pitch, start_time, duration, velocity_value, technique}`
//!   records, loaded wholesale. Missing `pitch`, `duration` and `velocity_value`
//!   fields are defaulted at the point of use, never rejected.
//! - **Config**: `{fps, width, height, seed, brush}`, stable for one render run.
//! - **Validation**: coded errors (fatal) and warnings (informational).
//!
//! # Example
//!
//! ```
//! use zorn_spec::{parse_notes, validate_notes, RenderConfig};
//!
//! let notes = parse_notes(r#"[
//!     {"pitch": 60, "start_time": 0.0, "duration": 0.5, "velocity_value": 0.8},
//!     {"pitch": 64, "start_time": 0.5, "duration": 1.2, "technique": "vibrato"}
//! ]"#).unwrap();
//!
//! let result = validate_notes(&notes);
//! assert!(result.is_ok());
//!
//! let config = RenderConfig::default();
//! assert_eq!(config.fps, 30);
//! ```
//!
//! # Modules
//!
//! - [`note`]: note records and technique tags
//! - [`config`]: render configuration
//! - [`error`]: error and warning types
//! - [`validation`]: note list and config validation

pub mod config;
pub mod error;
pub mod note;
pub mod validation;

pub use config::{load_config, BrushModel, RenderConfig};
pub use error::{
    ErrorCode, NoteError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use note::{
    load_notes, parse_notes, Note, Technique, DEFAULT_DURATION, DEFAULT_PITCH, DEFAULT_VELOCITY,
};
pub use validation::{validate_config, validate_notes};
