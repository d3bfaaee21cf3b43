//! End-to-end tests for frame rendering.
//!
//! These cover determinism across renderer instances and clones, growth
//! behavior over time, and the degenerate single-note piece.

use pretty_assertions::assert_eq;
use zorn_engine::{growth_factor, DrawIntent, Renderer, TechniqueKind};
use zorn_spec::{BrushModel, Note, RenderConfig, Technique};

fn riff() -> Vec<Note> {
    vec![
        Note::new(60, 0.0, 0.25, 0.4),
        Note::new(62, 0.25, 0.25, 0.5),
        Note::new(64, 0.5, 0.25, 0.6),
        Note::new(67, 0.75, 0.5, 0.9).with_technique(Technique::Bend),
        Note::new(65, 1.25, 0.2, 0.7).with_technique(Technique::Staccato),
        Note::new(64, 1.45, 0.2, 0.6).with_technique(Technique::Slide),
        Note::new(60, 1.65, 1.2, 0.3).with_technique(Technique::Vibrato),
    ]
}

fn config(brush: BrushModel) -> RenderConfig {
    RenderConfig {
        fps: 12,
        width: 800,
        height: 600,
        seed: 7,
        brush,
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_same_inputs_same_intents() {
    let mut a = Renderer::new(riff(), &config(BrushModel::Simple)).unwrap();
    let mut b = Renderer::new(riff(), &config(BrushModel::Simple)).unwrap();

    for index in [0, 5, 17, 30] {
        assert_eq!(a.render_frame(index), b.render_frame(index));
    }
}

#[test]
fn test_clones_render_independently() {
    let mut renderer = Renderer::new(riff(), &config(BrushModel::Bristle)).unwrap();
    let mut clone = renderer.clone();

    // Render out of order on the first renderer; the clone must not notice.
    renderer.render_frame(33);
    let expected = renderer.render_frame(20);
    assert_eq!(clone.render_frame(20), expected);
}

#[test]
fn test_seed_changes_intents() {
    let mut a = Renderer::new(riff(), &config(BrushModel::Simple)).unwrap();
    let mut b = Renderer::new(
        riff(),
        &RenderConfig {
            seed: 8,
            ..config(BrushModel::Simple)
        },
    )
    .unwrap();
    assert_ne!(a.render_frame(24).intents, b.render_frame(24).intents);
}

// ============================================================================
// Growth Tests
// ============================================================================

#[test]
fn test_growth_is_monotone() {
    let note = Note::new(60, 0.0, 1.0, 0.5);
    let mut previous = 0.0;
    for step in 0..=100 {
        let t = step as f64 * 0.02;
        let growth = growth_factor(&note, t);
        assert!(growth >= previous);
        if t >= 0.6 {
            assert_eq!(growth, 1.0);
        }
        previous = growth;
    }
}

#[test]
fn test_frames_accumulate_notes() {
    let mut renderer = Renderer::new(riff(), &config(BrushModel::Simple)).unwrap();
    let stroke_count = |intents: &[DrawIntent]| {
        intents
            .iter()
            .filter(|i| i.technique == TechniqueKind::Brushstroke)
            .count()
    };

    let early = renderer.render_frame(1);
    let late = renderer.render_frame(renderer.total_frames() - 1);
    assert!(stroke_count(&late.intents) > stroke_count(&early.intents));
    assert_eq!(late.index, renderer.total_frames() - 1);
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn test_single_note_piece() {
    let mut renderer =
        Renderer::new(vec![Note::new(72, 0.0, 1.0, 0.5)], &config(BrushModel::Simple)).unwrap();
    assert_eq!(renderer.total_frames(), 24);
    assert_eq!(renderer.analysis().dynamics.climax_idx, 0);

    let frames: Vec<_> = renderer.render_all().collect();
    assert_eq!(frames.len(), 24);
    assert!(frames
        .iter()
        .all(|f| f.intents.iter().all(|i| i.color.alpha.is_finite())));
}

#[test]
fn test_missing_fields_use_defaults() {
    let notes = zorn_spec::parse_notes(r#"[{"start_time": 0.0}, {"start_time": 0.5}]"#).unwrap();
    let mut renderer = Renderer::new(notes, &config(BrushModel::Simple)).unwrap();
    assert_eq!(renderer.layout().total_duration, 1.0);
    assert!(!renderer.render_frame(12).intents.is_empty());
}

#[test]
fn test_invalid_duration_rejected() {
    let notes = vec![Note::new(60, 0.0, -1.0, 0.5)];
    let err = Renderer::new(notes, &config(BrushModel::Simple)).unwrap_err();
    assert!(err.to_string().contains("E003"));
}

#[test]
fn test_extreme_pitches_render() {
    let notes = vec![
        Note::new(i32::MIN, 0.0, 0.5, 0.5),
        Note::new(i32::MAX, 0.5, 0.5, 0.5),
    ];
    assert!(zorn_spec::validate_notes(&notes).is_ok());

    let mut renderer = Renderer::new(notes, &config(BrushModel::Simple)).unwrap();
    let features = &renderer.analysis().features[1];
    assert_eq!(features.interval.map(|i| i.semitones), Some(u32::MAX as u64));
    assert!(!renderer.render_frame(9).intents.is_empty());
}
