//! Note-to-mark decisions.
//!
//! A note is placed on the canvas by [`Layout`], sized by its velocity and
//! distance from the climax, then painted as one primary shape chosen by its
//! technique tag followed by a fixed sequence of gated secondary marks.

use std::f64::consts::PI;

use zorn_spec::{BrushModel, Note, Technique};

use crate::analysis::{Contour, IntervalType, MusicalAnalysis, NoteFeatures};
use crate::color::{palette_color, PaintColor};
use crate::intent::{BlendMode, Point};
use crate::strokes::{Painter, SlideDirection};

/// Pitch drawn on the vertical center line.
pub const CENTER_PITCH: i32 = 60;

/// Vertical pixels per semitone.
pub const PIXELS_PER_SEMITONE: f64 = 20.0;

const MARGIN: f64 = 50.0;

/// Climax factor above which splatter may appear.
const SPLATTER_CLIMAX_THRESHOLD: f64 = 0.7;

/// Maps note time and pitch onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// End of the last note in the list, or 1.0 if that is not positive.
    pub total_duration: f64,
}

impl Layout {
    pub fn new(notes: &[Note], width: u32, height: u32) -> Self {
        let total_duration = notes
            .last()
            .map(Note::end_time)
            .filter(|d| *d > 0.0)
            .unwrap_or(1.0);

        Self {
            width: width as f64,
            height: height as f64,
            total_duration,
        }
    }

    /// Canvas position of a note.
    pub fn position(&self, note: &Note) -> Point {
        Point::new(
            MARGIN + note.start_time / self.total_duration * (self.width - 2.0 * MARGIN),
            self.height / 2.0
                + (CENTER_PITCH as f64 - note.pitch() as f64) * PIXELS_PER_SEMITONE,
        )
    }
}

/// Fully grown mark size: velocity sets the base, closeness to the climax
/// enlarges it by up to 70%.
pub fn note_size(note: &Note, climax_factor: f64) -> f64 {
    (80.0 + note.velocity() * 150.0) * (1.0 + climax_factor * 0.7)
}

/// Stroke angle for a contour: up-right when ascending, down-right when
/// descending, flat otherwise.
fn contour_angle(contour: Contour, magnitude: f64) -> f64 {
    match contour {
        Contour::Ascending => -magnitude,
        Contour::Descending => magnitude,
        Contour::Static => 0.0,
    }
}

fn interval_is(features: &NoteFeatures, types: &[IntervalType]) -> bool {
    features
        .interval
        .is_some_and(|interval| types.contains(&interval.interval_type))
}

/// Everything needed to paint one note in one frame.
#[derive(Debug, Clone, Copy)]
pub struct NoteContext<'a> {
    pub notes: &'a [Note],
    pub index: usize,
    pub analysis: &'a MusicalAnalysis,
    pub layout: &'a Layout,
    pub brush: BrushModel,
    /// Growth of the note in this frame, in [0, 1].
    pub growth: f64,
}

impl NoteContext<'_> {
    fn note(&self) -> &Note {
        &self.notes[self.index]
    }

    fn features(&self) -> &NoteFeatures {
        self.analysis.note(self.index)
    }
}

/// Paint one note: primary shape, then secondary marks in fixed order.
///
/// Each gated mark draws its probability from the frame stream only when
/// its condition holds.
pub fn paint_note(painter: &mut Painter, ctx: &NoteContext) {
    let note = ctx.note();
    let features = ctx.features();
    let growth = ctx.growth;

    let Point { x, y } = ctx.layout.position(note);
    let color = palette_color(note.pitch());
    let size = note_size(note, features.climax_factor) * growth;

    paint_primary(painter, note.technique, features, x, y, size, &color, growth);

    if interval_is(features, &[IntervalType::Unison, IntervalType::Step, IntervalType::Small])
        && painter.random() < 0.5 * growth
    {
        let secondary = previous_color(ctx).map_or(color, |prev| prev.mix(&color, 0.3));
        painter.wet_on_wet(x, y, size * 0.7, &color, &secondary, 0.6);
    }

    if features.rhythm.is_fast() && painter.random() < 0.7 * growth {
        let angle = contour_angle(features.contour, PI / 4.0);
        painter.dry_brush(x, y, angle, size * 1.2, size * 0.4, &color, 0.6);
    }

    let stroke_angle = contour_angle(features.contour, PI / 3.0);
    match ctx.brush {
        BrushModel::Simple => painter.brushstroke(
            x,
            y,
            stroke_angle,
            size * 1.5,
            size * 0.3,
            &color,
            0.7,
            BlendMode::Multiply,
        ),
        BrushModel::Bristle => {
            painter.oil_brushstroke(x, y, stroke_angle, size * 1.5, size * 0.3, &color, 0.7)
        }
    }

    if features.contour == Contour::Descending && painter.random() < 0.5 * growth {
        painter.dripping(x, y, size * 1.5, size * 0.6, &color, 0.4);
    }

    if features.climax_factor > SPLATTER_CLIMAX_THRESHOLD && painter.random() < 0.4 * growth {
        painter.splatter(x, y, size * 1.3, &color, 0.5);
    }

    if features.rhythm.is_slow() && painter.random() < 0.4 * growth {
        painter.craquelure(x, y, size * 0.8, 0.3);
    }
}

fn previous_color(ctx: &NoteContext) -> Option<PaintColor> {
    ctx.index
        .checked_sub(1)
        .map(|prev| palette_color(ctx.notes[prev].pitch()))
}

#[allow(clippy::too_many_arguments)]
fn paint_primary(
    painter: &mut Painter,
    technique: Technique,
    features: &NoteFeatures,
    x: f64,
    y: f64,
    size: f64,
    color: &PaintColor,
    growth: f64,
) {
    match technique {
        Technique::Regular => {
            painter.impasto(x, y, size * 0.6, color, 0.8);
            if interval_is(features, &[IntervalType::Unison, IntervalType::Step])
                && painter.random() < 0.6 * growth
            {
                painter.glazing(x, y, size * 0.8, color, 0.3);
            }
        }
        Technique::Legato => painter.legato(x, y, size, color),
        Technique::Staccato => painter.staccato(x, y, size, color),
        Technique::Bend => {
            painter.bend(x, y, size, color);
            painter.impasto(x, y, size * 0.5, color, 0.7);
        }
        Technique::Slide => {
            let direction = if features.contour == Contour::Ascending {
                SlideDirection::Up
            } else {
                SlideDirection::Down
            };
            painter.slide(x, y, size, color, direction);
        }
        Technique::Vibrato => {
            painter.vibrato(x, y, size, color);
            painter.impasto(x, y, size * 0.5, color, 0.7);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use crate::intent::{DrawIntent, TechniqueKind};
    use crate::noise::GradientNoise;
    use crate::rng::RngState;

    fn paint(notes: &[Note], index: usize, growth: f64, brush: BrushModel) -> Vec<DrawIntent> {
        let analysis = MusicalAnalysis::new(notes).unwrap();
        let layout = Layout::new(notes, 1920, 1080);
        let mut rng = RngState::new(42);
        let noise = GradientNoise::for_run(42);
        let mut intents = Vec::new();
        let ctx = NoteContext {
            notes,
            index,
            analysis: &analysis,
            layout: &layout,
            brush,
            growth,
        };
        paint_note(&mut Painter::new(&mut rng, &noise, &mut intents), &ctx);
        intents
    }

    /// Distinct technique kinds in emission order.
    fn kinds(intents: &[DrawIntent]) -> Vec<TechniqueKind> {
        let mut kinds: Vec<TechniqueKind> = Vec::new();
        for intent in intents {
            if kinds.last() != Some(&intent.technique) {
                kinds.push(intent.technique);
            }
        }
        kinds
    }

    #[test]
    fn test_layout_maps_time_and_pitch() {
        let notes = vec![Note::new(60, 0.0, 1.0, 0.5), Note::new(72, 1.0, 1.0, 0.5)];
        let layout = Layout::new(&notes, 1920, 1080);
        assert_eq!(layout.total_duration, 2.0);
        assert_eq!(layout.position(&notes[0]), Point::new(50.0, 540.0));
        assert_eq!(layout.position(&notes[1]), Point::new(50.0 + 0.5 * 1820.0, 300.0));
    }

    #[test]
    fn test_layout_extreme_pitch() {
        let notes = vec![Note::new(i32::MIN, 0.0, 1.0, 0.5)];
        let layout = Layout::new(&notes, 200, 100);
        let y = layout.position(&notes[0]).y;
        assert_eq!(y, 50.0 + (60.0 - i32::MIN as f64) * 20.0);
    }

    #[test]
    fn test_layout_degenerate_duration() {
        let notes = vec![Note::new(60, 0.0, 0.0, 0.5)];
        let layout = Layout::new(&notes, 200, 100);
        assert_eq!(layout.total_duration, 1.0);
    }

    #[test]
    fn test_note_size() {
        let note = Note::new(60, 0.0, 0.5, 1.0);
        assert_eq!(note_size(&note, 0.0), 230.0);
        assert!((note_size(&note, 1.0) - 391.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_growth_paints_base_marks_only() {
        let notes = vec![Note::new(60, 0.0, 2.0, 0.5)];
        let intents = paint(&notes, 0, 0.0, BrushModel::Simple);
        // Gated marks all fail at zero growth
        assert_eq!(kinds(&intents), vec![TechniqueKind::Impasto, TechniqueKind::Brushstroke]);
    }

    #[test]
    fn test_secondary_order() {
        // Fast stepwise descending run at full growth
        let notes: Vec<Note> = (0..6)
            .map(|i| Note::new(72 - i, i as f64 * 0.1, 0.1, 0.5 + i as f64 * 0.05))
            .collect();

        let order = [
            TechniqueKind::Impasto,
            TechniqueKind::Glaze,
            TechniqueKind::WetOnWet,
            TechniqueKind::DryBrush,
            TechniqueKind::Brushstroke,
            TechniqueKind::Drip,
            TechniqueKind::Splatter,
            TechniqueKind::Craquelure,
        ];

        for index in 0..notes.len() {
            let kinds = kinds(&paint(&notes, index, 1.0, BrushModel::Simple));
            let positions: Vec<usize> = kinds
                .iter()
                .map(|k| order.iter().position(|o| o == k).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", kinds);
            assert!(kinds.contains(&TechniqueKind::Brushstroke));
        }
    }

    #[test]
    fn test_wet_on_wet_leans_towards_previous_note() {
        // Vermilion then a step down to yellow ochre
        let notes = vec![Note::new(63, 0.0, 0.5, 0.5), Note::new(62, 0.5, 0.5, 0.5)];
        let analysis = MusicalAnalysis::new(&notes).unwrap();
        let layout = Layout::new(&notes, 1920, 1080);
        let noise = GradientNoise::for_run(42);
        let ctx = NoteContext {
            notes: &notes,
            index: 1,
            analysis: &analysis,
            layout: &layout,
            brush: BrushModel::Simple,
            growth: 1.0,
        };

        let secondary = palette::VERMILION.mix(&palette::YELLOW_OCHRE, 0.3);
        assert_eq!(secondary, PaintColor::rgb(220.0, 118.0, 67.0));

        let blobs = (0..64)
            .map(|seed| {
                let mut rng = RngState::new(seed);
                let mut intents = Vec::new();
                paint_note(&mut Painter::new(&mut rng, &noise, &mut intents), &ctx);
                intents
                    .into_iter()
                    .filter(|i| i.technique == TechniqueKind::WetOnWet)
                    .collect::<Vec<_>>()
            })
            .find(|blobs| !blobs.is_empty())
            .expect("wet-on-wet fires for some seed");

        let n = blobs.len();
        let first = palette::YELLOW_OCHRE.with_alpha(0.6);
        let last = palette::YELLOW_OCHRE
            .mix(&secondary, (n - 1) as f64 / n as f64)
            .with_alpha(0.6);
        assert_eq!(blobs[0].color, first);
        assert_eq!(blobs[n - 1].color, last);
        assert!(blobs[n - 1].color.g < 130.0);
    }

    #[test]
    fn test_primary_dispatch() {
        let cases = [
            (Technique::Legato, TechniqueKind::Legato),
            (Technique::Staccato, TechniqueKind::Staccato),
            (Technique::Bend, TechniqueKind::Bend),
            (Technique::Slide, TechniqueKind::Slide),
            (Technique::Vibrato, TechniqueKind::Vibrato),
        ];
        for (technique, kind) in cases {
            let notes = vec![Note::new(64, 0.0, 0.5, 0.5).with_technique(technique)];
            let intents = paint(&notes, 0, 1.0, BrushModel::Simple);
            assert_eq!(intents[0].technique, kind);
        }

        let notes = vec![Note::new(64, 0.0, 0.5, 0.5).with_technique(Technique::Bend)];
        let kinds = kinds(&paint(&notes, 0, 1.0, BrushModel::Simple));
        assert_eq!(&kinds[..2], &[TechniqueKind::Bend, TechniqueKind::Impasto]);
    }

    #[test]
    fn test_bristle_brush_model() {
        let notes = vec![Note::new(60, 0.0, 0.5, 0.9)];
        let intents = paint(&notes, 0, 1.0, BrushModel::Bristle);
        assert!(intents
            .iter()
            .any(|i| i.technique == TechniqueKind::OilBrushstroke));
        assert!(!intents
            .iter()
            .any(|i| i.technique == TechniqueKind::Brushstroke));
    }
}
