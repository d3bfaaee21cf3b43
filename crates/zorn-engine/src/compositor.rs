//! Frame compositor.
//!
//! Every frame is recomputed from scratch: the random stream is rewound to
//! the run seed, then every note that has started is painted in list order
//! at its current growth.

use serde::Serialize;
use zorn_spec::{validate_config, validate_notes, BrushModel, Note, RenderConfig, ValidationError};

use crate::analysis::MusicalAnalysis;
use crate::error::EngineError;
use crate::intent::DrawIntent;
use crate::noise::{CanvasWash, GradientNoise};
use crate::rng::RngState;
use crate::strokes::Painter;
use crate::technique::{paint_note, Layout, NoteContext};

/// Share of a note's duration over which it grows to full size.
pub const GROWTH_SPAN: f64 = 0.6;

/// Seconds of hold after the last note ends.
pub const TAIL_SECONDS: f64 = 1.0;

/// One rendered frame: the canvas ground plus the marks painted over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    /// Seconds since the start of the piece.
    pub time: f64,
    #[serde(skip)]
    pub canvas: CanvasWash,
    pub intents: Vec<DrawIntent>,
}

/// How far a note has grown at `time`, clamped to 1.
///
/// Only meaningful once the note has started.
pub fn growth_factor(note: &Note, time: f64) -> f64 {
    ((time - note.start_time) / (note.duration() * GROWTH_SPAN)).min(1.0)
}

/// Frames needed to show every note fully grown plus a one second hold.
pub fn total_frames(notes: &[Note], fps: u32) -> usize {
    notes
        .last()
        .map(|last| ((last.end_time() + TAIL_SECONDS) * fps as f64).ceil().max(0.0) as usize)
        .unwrap_or(0)
}

/// Renders frames for one note list and configuration.
///
/// Clones are independent: each owns its random stream, so frames can be
/// rendered on separate threads from clones of one renderer.
#[derive(Debug, Clone)]
pub struct Renderer {
    notes: Vec<Note>,
    analysis: MusicalAnalysis,
    layout: Layout,
    fps: u32,
    seed: u32,
    brush: BrushModel,
    noise: GradientNoise,
    wash: CanvasWash,
    rng: RngState,
}

impl Renderer {
    /// Validate the inputs and precompute the analysis and noise table.
    pub fn new(notes: Vec<Note>, config: &RenderConfig) -> Result<Self, EngineError> {
        let mut validation = validate_notes(&notes);
        validation.merge(validate_config(config));
        if let Err(errors) = validation.into_result() {
            return Err(EngineError::InvalidInput(join_errors(&errors)));
        }

        let analysis = MusicalAnalysis::new(&notes)?;
        let layout = Layout::new(&notes, config.width, config.height);
        let noise = GradientNoise::for_run(config.seed);

        log::info!(
            "renderer ready: {} notes, {} frames at {} fps, {}x{}, brush {}",
            notes.len(),
            total_frames(&notes, config.fps),
            config.fps,
            config.width,
            config.height,
            config.brush
        );

        Ok(Self {
            wash: CanvasWash::new(noise.clone()),
            notes,
            analysis,
            layout,
            fps: config.fps,
            seed: config.seed,
            brush: config.brush,
            noise,
            rng: RngState::new(config.seed),
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn analysis(&self) -> &MusicalAnalysis {
        &self.analysis
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn total_frames(&self) -> usize {
        total_frames(&self.notes, self.fps)
    }

    /// Render frame `index` from scratch.
    pub fn render_frame(&mut self, index: usize) -> Frame {
        let time = index as f64 / self.fps as f64;
        self.rng.reset(self.seed);

        let mut intents = Vec::new();
        let mut painter = Painter::new(&mut self.rng, &self.noise, &mut intents);

        let mut painted = 0;
        for (i, note) in self.notes.iter().enumerate() {
            if note.start_time > time {
                continue;
            }
            let ctx = NoteContext {
                notes: &self.notes,
                index: i,
                analysis: &self.analysis,
                layout: &self.layout,
                brush: self.brush,
                growth: growth_factor(note, time),
            };
            paint_note(&mut painter, &ctx);
            painted += 1;
        }

        log::debug!(
            "frame {} at {:.3}s: {} notes, {} intents",
            index,
            time,
            painted,
            intents.len()
        );

        Frame {
            index,
            time,
            canvas: self.wash.clone(),
            intents,
        }
    }

    /// Render every frame in order.
    pub fn render_all(&mut self) -> impl Iterator<Item = Frame> + '_ {
        (0..self.total_frames()).map(move |index| self.render_frame(index))
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> RenderConfig {
        RenderConfig {
            fps: 10,
            width: 400,
            height: 300,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_growth_factor() {
        let note = Note::new(60, 1.0, 1.0, 0.5);
        assert_eq!(growth_factor(&note, 1.0), 0.0);
        assert!((growth_factor(&note, 1.3) - 0.5).abs() < 1e-12);
        assert_eq!(growth_factor(&note, 1.6), 1.0);
        assert_eq!(growth_factor(&note, 5.0), 1.0);
    }

    #[test]
    fn test_total_frames() {
        let notes = vec![Note::new(60, 0.0, 0.5, 0.5), Note::new(62, 0.5, 1.0, 0.5)];
        // (1.5 + 1.0) * 30
        assert_eq!(total_frames(&notes, 30), 75);
        assert_eq!(total_frames(&[], 30), 0);
    }

    #[test]
    fn test_frame_is_reproducible() {
        let notes = vec![Note::new(60, 0.0, 0.5, 0.5), Note::new(62, 0.2, 0.5, 0.9)];
        let mut renderer = Renderer::new(notes, &config()).unwrap();
        let first = renderer.render_frame(4);
        renderer.render_frame(1);
        let second = renderer.render_frame(4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_future_notes_are_skipped() {
        let notes = vec![Note::new(60, 1.0, 0.5, 0.5)];
        let mut renderer = Renderer::new(notes, &config()).unwrap();
        assert!(renderer.render_frame(0).intents.is_empty());
        assert!(!renderer.render_frame(10).intents.is_empty());
    }

    #[test]
    fn test_empty_notes_rejected() {
        let err = Renderer::new(Vec::new(), &config()).unwrap_err();
        assert!(err.to_string().contains("E001"));
    }

    #[test]
    fn test_bad_config_rejected() {
        let notes = vec![Note::new(60, 0.0, 0.5, 0.5)];
        let bad = RenderConfig {
            fps: 0,
            ..config()
        };
        assert!(Renderer::new(notes, &bad).is_err());
    }

    #[test]
    fn test_render_all_covers_every_frame() {
        let notes = vec![Note::new(60, 0.0, 0.3, 0.5)];
        let mut renderer = Renderer::new(notes, &config()).unwrap();
        let indices: Vec<usize> = renderer.render_all().map(|f| f.index).collect();
        assert_eq!(indices, (0..13).collect::<Vec<_>>());
    }
}
