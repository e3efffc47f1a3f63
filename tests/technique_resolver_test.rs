// Test the two-phase technique state machine through the editing session

use tab_editor_wasm::models::token::{Joiner, NoteToken};
use tab_editor_wasm::{EditSession, TechniqueCode};

/// Helper to start a session with a technique selected
fn session_with(technique: TechniqueCode) -> EditSession {
    let mut session = EditSession::new();
    session.set_technique(technique);
    session
}

#[test]
fn test_normal_note_readback() {
    // For all valid (string, fret): placing a normal note reads back Fretted
    let mut session = EditSession::new();
    for string_index in 0..6 {
        session.jump_to(string_index); // spread across positions
        session.place_note(string_index, string_index as u8 * 4);
        assert_eq!(
            session.document().note_at(string_index, string_index),
            NoteToken::Fretted(string_index as u8 * 4)
        );
    }
}

#[test]
fn test_slide_round_trip_produces_composite_and_target() {
    let mut session = session_with(TechniqueCode::SlideUp);
    session.jump_to(3);
    session.place_note(1, 3);

    // Provisional plain note until the target arrives
    assert_eq!(session.document().note_at(1, 3), NoteToken::Fretted(3));
    assert_eq!(session.cursor(), 4);

    session.place_note(1, 5);
    assert_eq!(
        session.document().note_at(1, 3),
        NoteToken::Composite {
            from: 3,
            to: 5,
            joiner: Joiner::SlideUp,
        }
    );
    assert_eq!(session.document().note_at(1, 4), NoteToken::Fretted(5));
    assert_eq!(session.cursor(), 5);
    assert!(session.pending().is_none());
}

#[test]
fn test_each_paired_technique_uses_its_symbol() {
    let cases = [
        (TechniqueCode::SlideUp, "3/5"),
        (TechniqueCode::SlideDown, "3\\5"),
        (TechniqueCode::HammerOn, "3h5"),
        (TechniqueCode::PullOff, "3p5"),
    ];
    for (technique, expected) in cases {
        let mut session = session_with(technique);
        session.place_note(0, 3);
        session.place_note(0, 5);
        assert_eq!(session.document().note_at(0, 0).to_string(), expected);
    }
}

#[test]
fn test_cross_string_abort_writes_nothing() {
    let mut session = session_with(TechniqueCode::SlideUp);
    session.place_note(1, 3);
    let doc_before = session.document().clone();
    let cursor_before = session.cursor();

    // Second click on a different string: pending discarded, no write
    session.place_note(4, 5);
    assert!(session.pending().is_none());
    assert_eq!(session.document(), &doc_before);
    assert_eq!(session.cursor(), cursor_before);
}

#[test]
fn test_clear_position_cancels_pending() {
    let mut session = session_with(TechniqueCode::HammerOn);
    session.place_note(2, 3);
    assert!(session.pending().is_some());
    session.clear_position(0);
    assert!(session.pending().is_none());
}

#[test]
fn test_clear_all_cancels_pending_and_preserves_length() {
    let mut session = session_with(TechniqueCode::PullOff);
    session.extend(16);
    let length = session.document().length;
    session.place_note(2, 7);
    assert!(session.pending().is_some());

    assert!(session.clear_all(|| true));
    assert!(session.pending().is_none());
    assert_eq!(session.document().length, length);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_single_arity_techniques_never_go_pending() {
    for technique in [
        TechniqueCode::Normal,
        TechniqueCode::Mute,
        TechniqueCode::Harmonic,
        TechniqueCode::Bend,
        TechniqueCode::Release,
        TechniqueCode::Vibrato,
    ] {
        let mut session = session_with(technique);
        session.place_note(0, 5);
        assert!(session.pending().is_none(), "{:?} left a pending state", technique);
    }
}

#[test]
fn test_technique_tokens_read_back() {
    let cases = [
        (TechniqueCode::Mute, "x"),
        (TechniqueCode::Harmonic, "<5>"),
        (TechniqueCode::Bend, "5^"),
        (TechniqueCode::Release, "5^r"),
        (TechniqueCode::Vibrato, "5~"),
    ];
    for (technique, expected) in cases {
        let mut session = session_with(technique);
        session.place_note(3, 5);
        assert_eq!(session.document().note_at(3, 0).to_string(), expected);
    }
}

#[test]
fn test_out_of_range_fret_is_clamped() {
    let mut session = EditSession::new();
    session.place_note(0, 200);
    assert_eq!(session.document().note_at(0, 0), NoteToken::Fretted(22));
}

#[test]
fn test_extend_leaves_cells_unchanged() {
    let mut session = EditSession::new();
    session.place_note(0, 3);
    session.place_note(1, 5);
    let strings_before = session.document().strings.clone();
    let length_before = session.document().length;

    session.extend(16);

    assert_eq!(session.document().length, length_before + 16);
    assert_eq!(session.document().strings, strings_before);
}
