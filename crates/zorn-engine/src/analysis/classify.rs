//! Per-note interval and rhythm classification.

use serde::{Deserialize, Serialize};
use zorn_spec::Note;

/// Size band of the jump from the previous note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalType {
    /// 0 semitones
    Unison,
    /// 1-2 semitones
    Step,
    /// 3-4 semitones
    Small,
    /// 5-7 semitones
    Medium,
    /// more than 7 semitones
    Large,
}

/// Sign of the pitch change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalClassification {
    pub semitones: u64,
    #[serde(rename = "type")]
    pub interval_type: IntervalType,
    pub direction: Direction,
}

/// Classify the interval from `prev` to `curr`.
pub fn analyze_interval(prev: &Note, curr: &Note) -> IntervalClassification {
    let delta = curr.pitch() as i64 - prev.pitch() as i64;
    let semitones = delta.unsigned_abs();

    let interval_type = match semitones {
        0 => IntervalType::Unison,
        1..=2 => IntervalType::Step,
        3..=4 => IntervalType::Small,
        5..=7 => IntervalType::Medium,
        _ => IntervalType::Large,
    };

    let direction = match delta.signum() {
        1 => Direction::Ascending,
        -1 => Direction::Descending,
        _ => Direction::Static,
    };

    IntervalClassification {
        semitones,
        interval_type,
        direction,
    }
}

/// Speed band of a note, from its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhythmClassification {
    VeryFast,
    Fast,
    Medium,
    Slow,
    VerySlow,
}

impl RhythmClassification {
    pub fn is_fast(&self) -> bool {
        matches!(self, Self::VeryFast | Self::Fast)
    }

    pub fn is_slow(&self) -> bool {
        matches!(self, Self::Slow | Self::VerySlow)
    }
}

/// Classify a note by its duration.
pub fn analyze_rhythm(note: &Note) -> RhythmClassification {
    let duration = note.duration();

    if duration < 0.15 {
        RhythmClassification::VeryFast
    } else if duration < 0.3 {
        RhythmClassification::Fast
    } else if duration < 0.6 {
        RhythmClassification::Medium
    } else if duration < 1.0 {
        RhythmClassification::Slow
    } else {
        RhythmClassification::VerySlow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(from: i32, to: i32) -> IntervalClassification {
        analyze_interval(
            &Note::new(from, 0.0, 0.5, 0.5),
            &Note::new(to, 0.5, 0.5, 0.5),
        )
    }

    fn rhythm(duration: f64) -> RhythmClassification {
        analyze_rhythm(&Note::new(60, 0.0, duration, 0.5))
    }

    #[test]
    fn test_interval_bands() {
        assert_eq!(interval(60, 60).interval_type, IntervalType::Unison);
        assert_eq!(interval(60, 61).interval_type, IntervalType::Step);
        assert_eq!(interval(60, 64).interval_type, IntervalType::Small);
        assert_eq!(interval(60, 65).interval_type, IntervalType::Medium);
        assert_eq!(interval(60, 67).interval_type, IntervalType::Medium);
        assert_eq!(interval(60, 72).interval_type, IntervalType::Large);
    }

    #[test]
    fn test_interval_direction() {
        assert_eq!(interval(60, 60).direction, Direction::Static);
        assert_eq!(interval(60, 65).direction, Direction::Ascending);
        let down = interval(72, 60);
        assert_eq!(down.direction, Direction::Descending);
        assert_eq!(down.semitones, 12);
    }

    #[test]
    fn test_interval_extreme_pitches() {
        let wide = interval(i32::MIN, i32::MAX);
        assert_eq!(wide.semitones, u32::MAX as u64);
        assert_eq!(wide.interval_type, IntervalType::Large);
        assert_eq!(wide.direction, Direction::Ascending);
        assert_eq!(interval(i32::MAX, i32::MIN).direction, Direction::Descending);
    }

    #[test]
    fn test_rhythm_bands() {
        assert_eq!(rhythm(0.1), RhythmClassification::VeryFast);
        assert_eq!(rhythm(0.15), RhythmClassification::Fast);
        assert_eq!(rhythm(0.45), RhythmClassification::Medium);
        assert_eq!(rhythm(0.95), RhythmClassification::Slow);
        assert_eq!(rhythm(1.0), RhythmClassification::VerySlow);
        assert_eq!(rhythm(1.5), RhythmClassification::VerySlow);
    }

    #[test]
    fn test_interval_serializes_type_field() {
        let json = serde_json::to_value(interval(60, 62)).unwrap();
        assert_eq!(json["type"], "step");
        assert_eq!(json["direction"], "ascending");
    }
}
