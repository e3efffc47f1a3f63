//! Editing operations for the WASM API
//!
//! The JavaScript-facing mutation surface: note placement, chord entry,
//! clears, capacity extension, cursor movement, and technique selection.
//! Every operation is total over the document; invalid inputs are
//! clamped or ignored by the core, and only boundary-level problems
//! (no session, unknown technique code) surface as errors.

use wasm_bindgen::prelude::*;

use crate::api::helpers::with_session;
use crate::models::core::EXTEND_STEP;
use crate::models::techniques::TechniqueCode;
use crate::{wasm_log, wasm_warn};

/// Place a note at the cursor on a string, applying the selected
/// technique. Drives the two-phase technique state machine.
#[wasm_bindgen(js_name = placeNote)]
pub fn place_note(string_index: usize, fret: u8) -> Result<(), JsValue> {
    with_session(|session| {
        wasm_log!("placeNote: string={}, fret={}", string_index, fret);
        session.place_note(string_index, fret);
        Ok(())
    })
}

/// Clear one cell (the preview's click-to-remove action).
#[wasm_bindgen(js_name = removeNote)]
pub fn remove_note(string_index: usize, position: usize) -> Result<(), JsValue> {
    with_session(|session| {
        session.remove_note(string_index, position);
        Ok(())
    })
}

/// Set the chord label at a position; a blank label clears it.
#[wasm_bindgen(js_name = setChord)]
pub fn set_chord(position: usize, label: &str) -> Result<(), JsValue> {
    with_session(|session| {
        session.set_chord(position, label);
        Ok(())
    })
}

/// Chord entry for the host's input box, which edits at the cursor.
#[wasm_bindgen(js_name = setChordAtCursor)]
pub fn set_chord_at_cursor(label: &str) -> Result<(), JsValue> {
    with_session(|session| {
        session.set_chord_at_cursor(label);
        Ok(())
    })
}

#[wasm_bindgen(js_name = clearChord)]
pub fn clear_chord(position: usize) -> Result<(), JsValue> {
    with_session(|session| {
        session.clear_chord(position);
        Ok(())
    })
}

/// Clear the chord and every string's note at one position.
#[wasm_bindgen(js_name = clearPosition)]
pub fn clear_position(position: usize) -> Result<(), JsValue> {
    with_session(|session| {
        session.clear_position(position);
        Ok(())
    })
}

/// Clear the whole grid. `confirmed` carries the host's answer to its
/// own confirmation dialog; returns whether the clear ran.
#[wasm_bindgen(js_name = clearAll)]
pub fn clear_all(confirmed: bool) -> Result<bool, JsValue> {
    with_session(|session| {
        let cleared = session.clear_all(|| confirmed);
        if !cleared {
            wasm_log!("clearAll declined by host confirmation");
        }
        Ok(cleared)
    })
}

/// Grow the tab. Omitting `amount` uses the UI's extend step.
#[wasm_bindgen(js_name = extendTab)]
pub fn extend_tab(amount: Option<usize>) -> Result<usize, JsValue> {
    with_session(|session| {
        session.extend(amount.unwrap_or(EXTEND_STEP));
        Ok(session.document().length)
    })
}

/// Move the cursor by a signed delta; returns the new position.
#[wasm_bindgen(js_name = moveCursor)]
pub fn move_cursor(delta: i32) -> Result<usize, JsValue> {
    with_session(|session| Ok(session.move_cursor(delta as isize)))
}

/// Jump to an absolute position; returns the (clamped) new position.
#[wasm_bindgen(js_name = jumpToPosition)]
pub fn jump_to_position(position: usize) -> Result<usize, JsValue> {
    with_session(|session| Ok(session.jump_to(position)))
}

/// Select the technique for subsequent placements.
#[wasm_bindgen(js_name = setTechnique)]
pub fn set_technique(code: &str) -> Result<(), JsValue> {
    let technique = TechniqueCode::from_id(code).ok_or_else(|| {
        wasm_warn!("setTechnique: unknown code '{}'", code);
        JsValue::from_str(&format!("Unknown technique code: {}", code))
    })?;
    with_session(|session| {
        session.set_technique(technique);
        Ok(())
    })
}

/// Explicitly cancel a pending two-note technique.
#[wasm_bindgen(js_name = cancelPendingTechnique)]
pub fn cancel_pending_technique() -> Result<(), JsValue> {
    with_session(|session| {
        session.cancel_pending();
        Ok(())
    })
}
