//! Guitar Tab Editor WASM API
//!
//! This module provides the JavaScript-facing API for the tab editor.
//! The session behind the boundary is the source of truth while editing;
//! the host renders from snapshots and structured state queries.
//!
//! # Module Structure
//!
//! - `helpers`: logging, session storage, and serialization utilities
//! - `session`: document lifecycle (new/load/save/autosave)
//! - `edit`: mutation operations (notes, chords, clears, cursor, technique)
//! - `export`: text export and read-side state queries

pub mod edit;
pub mod export;
pub mod helpers;
pub mod session;

// Re-export all public API functions
pub use edit::{
    cancel_pending_technique, clear_all, clear_chord, clear_position, extend_tab,
    jump_to_position, move_cursor, place_note, remove_note, set_chord, set_chord_at_cursor,
    set_technique,
};
pub use export::{editor_state, export_tab_text, technique_list};
pub use session::{load_document, new_document, poll_autosave, save_document};
