//! File loading tests for note lists and render configs.

use std::io::Write;

use pretty_assertions::assert_eq;
use zorn_spec::{
    load_config, load_notes, validate_notes, BrushModel, Note, NoteError, RenderConfig, Technique,
};

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_notes_from_file() {
    let file = write_temp(
        r#"[
            {"pitch": 57, "start_time": 0.0, "duration": 0.25, "velocity_value": 0.6},
            {"pitch": 60, "start_time": 0.25, "duration": 0.4, "velocity_value": 0.9, "technique": "bend"},
            {"start_time": 0.65, "extra_field": "ignored"}
        ]"#,
    );

    let notes = load_notes(file.path()).unwrap();
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0], Note::new(57, 0.0, 0.25, 0.6));
    assert_eq!(notes[1].technique, Technique::Bend);
    assert_eq!(notes[2].pitch(), 60);
    assert!(validate_notes(&notes).is_ok());
}

#[test]
fn test_load_notes_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_notes(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(NoteError::Io(_))));
}

#[test]
fn test_load_notes_not_an_array() {
    let file = write_temp(r#"{"pitch": 60}"#);
    assert!(matches!(load_notes(file.path()), Err(NoteError::Json(_))));
}

#[test]
fn test_load_config_from_file() {
    let file = write_temp(r#"{"width": 640, "height": 360, "seed": 7, "brush": "bristle"}"#);
    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config,
        RenderConfig {
            fps: 30,
            width: 640,
            height: 360,
            seed: 7,
            brush: BrushModel::Bristle,
        }
    );
}
