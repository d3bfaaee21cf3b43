//! Local melodic direction over a sliding window.

use serde::{Deserialize, Serialize};
use zorn_spec::Note;

/// Default window length for contour analysis.
pub const CONTOUR_WINDOW: usize = 3;

/// Slope (semitones per note) beyond which a window counts as moving.
const TREND_THRESHOLD: f64 = 0.5;

/// Local melodic direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contour {
    Ascending,
    Descending,
    Static,
}

/// Label every note with the trend of the window around it.
///
/// The window starts `window / 2` notes before the current one and is
/// clamped to the list, so the edges see shorter windows.
pub fn analyze_melodic_contour(notes: &[Note], window: usize) -> Vec<Contour> {
    (0..notes.len())
        .map(|i| {
            let start = i.saturating_sub(window / 2);
            let end = notes.len().min(start + window);
            let pitches: Vec<f64> = notes[start..end]
                .iter()
                .map(|n| n.pitch() as f64)
                .collect();

            let trend = linear_trend(&pitches);
            if trend > TREND_THRESHOLD {
                Contour::Ascending
            } else if trend < -TREND_THRESHOLD {
                Contour::Descending
            } else {
                Contour::Static
            }
        })
        .collect()
}

/// Least-squares slope of `values` against their index. Zero when undefined.
pub fn linear_trend(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    let avg_x = (0..n).map(|i| i as f64).sum::<f64>() / n as f64;
    let avg_y = values.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - avg_x;
        numerator += dx * (y - avg_y);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
