// Test the persisted envelope: snapshot shape, sanitizing load, and a
// round trip through a real file the way the host's store hands blobs back

use std::fs;
use std::io::Write;

use tab_editor_wasm::models::core::{DEFAULT_TAB_LENGTH, STRING_COUNT};
use tab_editor_wasm::models::token::NoteToken;
use tab_editor_wasm::{EditSession, SavedTab, TechniqueCode};

#[test]
fn test_snapshot_envelope_shape() {
    let mut session = EditSession::new();
    session.set_technique(TechniqueCode::SlideUp);
    session.place_note(0, 3);
    session.place_note(0, 5);
    session.set_chord(0, "Am");

    let json = session.save().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["tab"]["lines"].as_array().unwrap().len(), STRING_COUNT);
    assert_eq!(value["tab"]["lines"][0]["string"], "e");
    assert_eq!(value["tab"]["lines"][0]["notes"][0], "3/5");
    assert_eq!(value["tab"]["lines"][0]["notes"][1], "5");
    assert_eq!(value["tab"]["chords"][0], "Am");
    assert_eq!(value["currentPosition"], 2);
    assert_eq!(value["selectedTechnique"], "slideUp");
    assert_eq!(value["tabLength"], DEFAULT_TAB_LENGTH);
}

#[test]
fn test_round_trip_through_file() {
    let mut session = EditSession::new();
    session.place_note(1, 7);
    session.set_technique(TechniqueCode::Vibrato);
    session.place_note(2, 9);
    session.set_chord(0, "Dm");
    session.extend(16);

    let saved = session.save();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tab.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(saved.to_json().unwrap().as_bytes()).unwrap();

    let blob = fs::read_to_string(&path).unwrap();
    let reloaded = EditSession::from_saved(&SavedTab::from_json(&blob).unwrap());

    assert_eq!(reloaded.document(), session.document());
    assert_eq!(reloaded.cursor(), session.cursor());
    assert_eq!(reloaded.technique(), session.technique());
    assert!(!reloaded.is_dirty());
}

#[test]
fn test_load_sanitizes_wrong_string_count() {
    let json = r#"{
        "tab": { "chords": [], "lines": [{ "string": "e", "notes": ["5"] }] },
        "currentPosition": 0,
        "selectedTechnique": "normal",
        "tabLength": 32
    }"#;
    let session = EditSession::from_saved(&SavedTab::from_json(json).unwrap());
    assert_eq!(session.document().strings.len(), STRING_COUNT);
    assert_eq!(session.document().note_at(0, 0), NoteToken::Fretted(5));
    assert_eq!(session.document().strings[5].label, "E");
}

#[test]
fn test_load_preserves_notes_past_capacity() {
    // A shrunken tabLength must not truncate written data
    let json = r#"{
        "tab": { "chords": [], "lines": [
            { "string": "e", "notes": ["-", "-", "-", "-", "7"] },
            { "string": "B", "notes": [] },
            { "string": "G", "notes": [] },
            { "string": "D", "notes": [] },
            { "string": "A", "notes": [] },
            { "string": "E", "notes": [] }
        ] },
        "currentPosition": 1,
        "selectedTechnique": "normal",
        "tabLength": 3
    }"#;
    let session = EditSession::from_saved(&SavedTab::from_json(json).unwrap());
    assert_eq!(session.document().length, 3);
    assert_eq!(session.document().note_at(0, 4), NoteToken::Fretted(7));
    assert_eq!(session.document().max_observed_len(), 5);

    // and the export shows the overhang
    let text = tab_editor_wasm::render_tab_text(session.document());
    assert!(text.lines().nth(1).unwrap().contains('7'));
}

#[test]
fn test_load_rejects_only_unparseable_json() {
    assert!(SavedTab::from_json("{ not json").is_err());
    assert!(SavedTab::from_json("{}").is_ok());
}
