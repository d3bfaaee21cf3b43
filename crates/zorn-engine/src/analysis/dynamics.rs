//! Velocity profile of a whole piece.

use serde::{Deserialize, Serialize};
use zorn_spec::Note;

use crate::error::EngineError;

/// Window length for crescendo / decrescendo detection.
pub const DYNAMICS_WINDOW: usize = 5;

/// Fraction of a window's consecutive pairs that must move in one direction.
pub const DYNAMICS_TREND_RATIO: f64 = 0.7;

/// Loudness summary, computed once per note list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsProfile {
    pub avg: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    /// Index of the first note reaching `max`.
    pub climax_idx: usize,
    pub has_crescendo: bool,
    pub has_decrescendo: bool,
}

/// Reduce the note velocities to a [`DynamicsProfile`].
///
/// Fails on an empty note list.
pub fn analyze_dynamics(notes: &[Note]) -> Result<DynamicsProfile, EngineError> {
    if notes.is_empty() {
        return Err(EngineError::InvalidInput(
            "cannot analyze dynamics of an empty note list".to_string(),
        ));
    }

    let velocities: Vec<f64> = notes.iter().map(Note::velocity).collect();

    let avg = velocities.iter().sum::<f64>() / velocities.len() as f64;
    let max = velocities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = velocities.iter().copied().fold(f64::INFINITY, f64::min);
    let climax_idx = velocities.iter().position(|&v| v == max).unwrap_or(0);

    Ok(DynamicsProfile {
        avg,
        max,
        min,
        range: max - min,
        climax_idx,
        has_crescendo: detect_trend(&velocities, |prev, next| next > prev),
        has_decrescendo: detect_trend(&velocities, |prev, next| next < prev),
    })
}

/// True if any window has enough consecutive pairs satisfying `step`.
fn detect_trend(velocities: &[f64], step: impl Fn(f64, f64) -> bool) -> bool {
    let required = DYNAMICS_TREND_RATIO * (DYNAMICS_WINDOW - 1) as f64;
    velocities.windows(DYNAMICS_WINDOW).any(|window| {
        let moves = window.windows(2).filter(|pair| step(pair[0], pair[1])).count();
        moves as f64 >= required
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes_with_velocities(velocities: &[f64]) -> Vec<Note> {
        velocities
            .iter()
            .enumerate()
            .map(|(i, &v)| Note::new(60, i as f64 * 0.5, 0.5, v))
            .collect()
    }

    #[test]
    fn test_profile_values() {
        let profile = analyze_dynamics(&notes_with_velocities(&[0.2, 0.5, 0.9, 0.3])).unwrap();
        assert_eq!(profile.climax_idx, 2);
        assert_eq!(profile.max, 0.9);
        assert_eq!(profile.min, 0.2);
        assert!((profile.range - 0.7).abs() < 1e-12);
        assert!((profile.avg - 0.475).abs() < 1e-12);
        assert!(!profile.has_crescendo);
        assert!(!profile.has_decrescendo);
    }

    #[test]
    fn test_climax_ties_take_first() {
        let profile = analyze_dynamics(&notes_with_velocities(&[0.4, 0.8, 0.1, 0.8])).unwrap();
        assert_eq!(profile.climax_idx, 1);
    }

    #[test]
    fn test_crescendo_detected() {
        // Three of four pairs rise
        let profile =
            analyze_dynamics(&notes_with_velocities(&[0.1, 0.2, 0.15, 0.4, 0.6, 0.5])).unwrap();
        assert!(profile.has_crescendo);
        assert!(!profile.has_decrescendo);
    }

    #[test]
    fn test_crescendo_needs_three_of_four_pairs() {
        let profile =
            analyze_dynamics(&notes_with_velocities(&[0.1, 0.2, 0.15, 0.4, 0.6])).unwrap();
        assert!(profile.has_crescendo);

        let profile =
            analyze_dynamics(&notes_with_velocities(&[0.1, 0.2, 0.15, 0.4, 0.3])).unwrap();
        assert!(!profile.has_crescendo);
    }

    #[test]
    fn test_decrescendo_detected() {
        let profile =
            analyze_dynamics(&notes_with_velocities(&[0.9, 0.8, 0.7, 0.6, 0.5])).unwrap();
        assert!(profile.has_decrescendo);
        assert!(!profile.has_crescendo);
    }

    #[test]
    fn test_short_list_never_trends() {
        let profile = analyze_dynamics(&notes_with_velocities(&[0.1, 0.2, 0.3, 0.4])).unwrap();
        assert!(!profile.has_crescendo);
    }

    #[test]
    fn test_missing_velocity_defaults() {
        let mut note = Note::new(60, 0.0, 0.5, 0.0);
        note.velocity_value = None;
        let profile = analyze_dynamics(&[note]).unwrap();
        assert_eq!(profile.max, 0.5);
        assert_eq!(profile.range, 0.0);
    }

    #[test]
    fn test_empty_list_fails() {
        assert!(matches!(
            analyze_dynamics(&[]),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
