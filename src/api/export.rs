//! Export and read-side operations for the WASM API
//!
//! The text export plus the structured state the host UI renders from
//! (position indicator, technique selector, pending banner, legend).

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, with_session};
use crate::edit::PendingTechnique;
use crate::models::techniques::{TechniqueCode, TECHNIQUES};
use crate::renderers::tab_text::render_tab_text;
use crate::wasm_info;

/// Export the document as the canonical monospace text block.
///
/// Writing the string to a file is the host's job.
#[wasm_bindgen(js_name = exportTabText)]
pub fn export_tab_text() -> Result<String, JsValue> {
    wasm_info!("exportTabText called");
    with_session(|session| {
        let text = render_tab_text(session.document());
        wasm_info!("  Export generated: {} bytes", text.len());
        Ok(text)
    })
}

/// Editor state the host UI binds to.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct EditorStateInfo {
    current_position: usize,
    tab_length: usize,
    selected_technique: TechniqueCode,
    pending_technique: Option<PendingTechnique>,
    dirty: bool,
}

/// Current cursor/technique/pending/dirty state as a JS object.
#[wasm_bindgen(js_name = editorState)]
pub fn editor_state() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let info = EditorStateInfo {
            current_position: session.cursor(),
            tab_length: session.document().length,
            selected_technique: session.technique(),
            pending_technique: session.pending(),
            dirty: session.is_dirty(),
        };
        serialize(&info, "Editor state serialization error")
    })
}

/// The declarative technique table, for the host's selector and legend.
#[wasm_bindgen(js_name = techniqueList)]
pub fn technique_list() -> Result<JsValue, JsValue> {
    serialize(&TECHNIQUES.as_slice(), "Technique table serialization error")
}
