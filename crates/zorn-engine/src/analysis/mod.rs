//! Musical feature analysis.
//!
//! Everything here is a pure function of the note list. The results are
//! computed once per run and shared by every frame.

mod classify;
mod contour;
mod dynamics;

pub use classify::{
    analyze_interval, analyze_rhythm, Direction, IntervalClassification, IntervalType,
    RhythmClassification,
};
pub use contour::{analyze_melodic_contour, linear_trend, Contour, CONTOUR_WINDOW};
pub use dynamics::{analyze_dynamics, DynamicsProfile, DYNAMICS_TREND_RATIO, DYNAMICS_WINDOW};

use serde::{Deserialize, Serialize};
use zorn_spec::Note;

use crate::error::EngineError;

/// Derived features for one note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteFeatures {
    /// Interval from the previous note; `None` for the first note.
    pub interval: Option<IntervalClassification>,
    pub rhythm: RhythmClassification,
    pub contour: Contour,
    /// Proximity to the loudest note, 1.0 at the climax itself.
    pub climax_factor: f64,
}

/// Precomputed analysis of a whole note list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicalAnalysis {
    pub dynamics: DynamicsProfile,
    pub contour: Vec<Contour>,
    pub features: Vec<NoteFeatures>,
}

impl MusicalAnalysis {
    /// Analyze `notes`. Fails on an empty list.
    pub fn new(notes: &[Note]) -> Result<Self, EngineError> {
        let dynamics = analyze_dynamics(notes)?;
        let contour = analyze_melodic_contour(notes, CONTOUR_WINDOW);

        let features = notes
            .iter()
            .enumerate()
            .map(|(i, note)| NoteFeatures {
                interval: i
                    .checked_sub(1)
                    .map(|prev| analyze_interval(&notes[prev], note)),
                rhythm: analyze_rhythm(note),
                contour: contour[i],
                climax_factor: climax_factor(i, dynamics.climax_idx, notes.len()),
            })
            .collect();

        log::debug!(
            "analyzed {} notes: climax at {}, crescendo={}, decrescendo={}",
            notes.len(),
            dynamics.climax_idx,
            dynamics.has_crescendo,
            dynamics.has_decrescendo
        );

        Ok(Self {
            dynamics,
            contour,
            features,
        })
    }

    /// Features of the note at `index`.
    pub fn note(&self, index: usize) -> &NoteFeatures {
        &self.features[index]
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// `1 - |index - climax_idx| / len`.
pub fn climax_factor(index: usize, climax_idx: usize, len: usize) -> f64 {
    1.0 - index.abs_diff(climax_idx) as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_note_analysis() {
        let analysis = MusicalAnalysis::new(&[Note::new(64, 0.0, 2.0, 0.7)]).unwrap();
        assert_eq!(analysis.len(), 1);
        let features = analysis.note(0);
        assert!(features.interval.is_none());
        assert_eq!(features.contour, Contour::Static);
        assert_eq!(features.rhythm, RhythmClassification::VerySlow);
        assert_eq!(features.climax_factor, 1.0);
    }

    #[test]
    fn test_features_follow_previous_note() {
        let notes = vec![
            Note::new(60, 0.0, 0.1, 0.3),
            Note::new(62, 0.1, 0.1, 0.9),
            Note::new(74, 0.2, 0.8, 0.4),
            Note::new(70, 1.0, 0.8, 0.2),
        ];
        let analysis = MusicalAnalysis::new(&notes).unwrap();
        assert_eq!(
            analysis.note(1).interval.map(|i| i.interval_type),
            Some(IntervalType::Step)
        );
        assert_eq!(
            analysis.note(2).interval.map(|i| i.interval_type),
            Some(IntervalType::Large)
        );
        assert_eq!(analysis.note(1).climax_factor, 1.0);
        assert_eq!(analysis.note(3).climax_factor, 0.5);
    }

    #[test]
    fn test_empty_analysis_fails() {
        assert!(MusicalAnalysis::new(&[]).is_err());
    }
}
