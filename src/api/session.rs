//! Document lifecycle for the WASM API
//!
//! Creating, loading, saving, and autosave polling. The persisted
//! envelope crosses the boundary as a JSON string; the external store
//! treats it as an opaque blob.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_session, with_session};
use crate::edit::EditSession;
use crate::models::SavedTab;
use crate::{wasm_error, wasm_info, wasm_log};

/// Start a fresh, empty tab document.
#[wasm_bindgen(js_name = newDocument)]
pub fn new_document() -> Result<(), JsValue> {
    wasm_info!("newDocument called");
    let mut guard = lock_session()?;
    *guard = Some(EditSession::new());
    Ok(())
}

/// Load a persisted tab document.
///
/// Structural problems (wrong string count, junk tokens, out-of-range
/// cursor) are sanitized; only unparseable JSON is an error.
#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document(json: &str) -> Result<(), JsValue> {
    wasm_info!("loadDocument called: {} bytes", json.len());

    let saved = SavedTab::from_json(json).map_err(|e| {
        wasm_error!("Load error: {}", e);
        JsValue::from_str(&format!("Load error: {}", e))
    })?;

    let session = EditSession::from_saved(&saved);
    wasm_log!(
        "  Restored document: length={}, cursor={}",
        session.document().length,
        session.cursor()
    );

    let mut guard = lock_session()?;
    *guard = Some(session);
    Ok(())
}

/// Manual save: returns the snapshot JSON and marks the session clean.
#[wasm_bindgen(js_name = saveDocument)]
pub fn save_document() -> Result<String, JsValue> {
    wasm_info!("saveDocument called");
    with_session(|session| {
        let saved = session.save();
        saved.to_json().map_err(|e| {
            wasm_error!("Save serialization error: {}", e);
            JsValue::from_str(&format!("Save serialization error: {}", e))
        })
    })
}

/// Autosave poll; the host calls this on its own timer.
///
/// Returns the snapshot JSON when the quiet period after the last
/// mutation has elapsed, otherwise undefined. `now_ms` defaults to the
/// JavaScript clock when omitted.
#[wasm_bindgen(js_name = pollAutosave)]
pub fn poll_autosave(now_ms: Option<f64>) -> Result<Option<String>, JsValue> {
    let now_ms = match now_ms {
        Some(now) => now,
        None => default_now_ms(),
    };
    with_session(|session| match session.poll_autosave(now_ms) {
        Some(saved) => {
            wasm_info!("pollAutosave firing: handing snapshot to host");
            saved.to_json().map(Some).map_err(|e| {
                wasm_error!("Autosave serialization error: {}", e);
                JsValue::from_str(&format!("Autosave serialization error: {}", e))
            })
        }
        None => Ok(None),
    })
}

#[cfg(target_arch = "wasm32")]
fn default_now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_now_ms() -> f64 {
    0.0
}
