//! Note list and render config validation.

use crate::config::RenderConfig;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::note::Note;

/// Horizontal margin on each side of the frame, in pixels.
pub const HORIZONTAL_MARGIN: u32 = 50;

/// Threshold for warning about seed near overflow boundary.
const SEED_OVERFLOW_WARNING_THRESHOLD: u32 = u32::MAX - 1000;

/// Validates a note list.
///
/// Missing optional fields are never errors; only values that cannot be
/// rendered at all are rejected.
///
/// # Example
/// ```
/// use zorn_spec::{validate_notes, Note};
///
/// let result = validate_notes(&[Note::new(60, 0.0, 0.5, 0.8)]);
/// assert!(result.is_ok());
///
/// let result = validate_notes(&[]);
/// assert!(!result.is_ok());
/// ```
pub fn validate_notes(notes: &[Note]) -> ValidationResult {
    let mut result = ValidationResult::default();

    if notes.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyNoteList,
            "note list must contain at least one note",
            "notes",
        ));
        return result;
    }

    for (index, note) in notes.iter().enumerate() {
        validate_note(index, note, &mut result);
    }

    check_ordering(notes, &mut result);

    for warning in &result.warnings {
        log::warn!("{}", warning);
    }

    result
}

fn validate_note(index: usize, note: &Note, result: &mut ValidationResult) {
    if !note.start_time.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidStartTime,
            format!("start_time must be finite, got {}", note.start_time),
            format!("notes[{}].start_time", index),
        ));
    }

    // Growth divides by the duration, so zero is as unusable as negative
    if let Some(duration) = note.duration {
        if !duration.is_finite() || duration <= 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDuration,
                format!("duration must be a positive number, got {}", duration),
                format!("notes[{}].duration", index),
            ));
        }
    }

    if let Some(velocity) = note.velocity_value {
        if !velocity.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidVelocity,
                format!("velocity_value must be finite, got {}", velocity),
                format!("notes[{}].velocity_value", index),
            ));
        } else if !(0.0..=1.0).contains(&velocity) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::VelocityOutOfRange,
                format!("velocity_value {} is outside [0, 1]", velocity),
                format!("notes[{}].velocity_value", index),
            ));
        }
    }
}

/// Notes are consumed in list order; an unsorted list still renders but
/// the layout and growth timing will not match playback.
fn check_ordering(notes: &[Note], result: &mut ValidationResult) {
    if let Some(index) = notes
        .windows(2)
        .position(|pair| pair[1].start_time < pair[0].start_time)
    {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnsortedNotes,
            "notes are not sorted by start_time and will not be re-sorted",
            format!("notes[{}].start_time", index + 1),
        ));
    }
}

/// Validates a render configuration.
pub fn validate_config(config: &RenderConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if config.fps == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFps,
            "fps must be greater than zero",
            "fps",
        ));
    }

    if config.width <= HORIZONTAL_MARGIN * 2 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidWidth,
            format!(
                "width must be greater than {}, got {}",
                HORIZONTAL_MARGIN * 2,
                config.width
            ),
            "width",
        ));
    }

    if config.height == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidHeight,
            "height must be greater than zero",
            "height",
        ));
    }

    if config.seed >= SEED_OVERFLOW_WARNING_THRESHOLD {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SeedNearOverflow,
            format!(
                "seed {} is close to the maximum value ({})",
                config.seed,
                u32::MAX
            ),
            "seed",
        ));
    }

    result
}
