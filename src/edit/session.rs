//! Editing session
//!
//! The thin orchestrator over the grid model: cursor position, selected
//! technique, pending-technique state, and the dirty flag. All document
//! mutations flow through here so dirty tracking and pending-technique
//! cancellation stay in one place. Saving hands out [`SavedTab`]
//! snapshots; the debounced autosave is polled by the host with its own
//! clock and never fires while the session is clean.

use crate::edit::resolver::{resolve_place, PendingTechnique};
use crate::models::core::TabDocument;
use crate::models::persistence::SavedTab;
use crate::models::techniques::TechniqueCode;
use crate::utils::debounce::SaveDebouncer;

/// Quiet period between the last mutation and an autosave hand-off.
pub const SAVE_DEBOUNCE_MS: f64 = 1000.0;

/// One editor instance: a document plus interaction state.
#[derive(Debug)]
pub struct EditSession {
    doc: TabDocument,
    cursor: usize,
    technique: TechniqueCode,
    pending: Option<PendingTechnique>,
    dirty: bool,
    revision: u64,
    autosave: SaveDebouncer,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Fresh session over an empty document.
    pub fn new() -> Self {
        Self::with_document(TabDocument::new(), 0, TechniqueCode::Normal)
    }

    /// Session restored from a persisted envelope (sanitizing).
    pub fn from_saved(saved: &SavedTab) -> Self {
        let (doc, cursor, technique) = saved.restore();
        Self::with_document(doc, cursor, technique)
    }

    fn with_document(doc: TabDocument, cursor: usize, technique: TechniqueCode) -> Self {
        let cursor = cursor.min(doc.length.saturating_sub(1));
        Self {
            doc,
            cursor,
            technique,
            pending: None,
            dirty: false,
            revision: 0,
            autosave: SaveDebouncer::new(SAVE_DEBOUNCE_MS),
        }
    }

    pub fn document(&self) -> &TabDocument {
        &self.doc
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn technique(&self) -> TechniqueCode {
        self.technique
    }

    pub fn pending(&self) -> Option<PendingTechnique> {
        self.pending
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_mutated(&mut self) {
        self.dirty = true;
        self.revision = self.revision.wrapping_add(1);
    }

    fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1).min(self.doc.length.saturating_sub(1));
    }

    /// Place a note at the cursor with the selected technique, driving
    /// the technique resolver. See [`resolve_place`] for the state
    /// machine; this applies its writes and cursor/pending effects.
    pub fn place_note(&mut self, string_index: usize, fret: u8) {
        if string_index >= self.doc.strings.len() || self.doc.length == 0 {
            log::debug!("place_note ignored: string {} out of range", string_index);
            return;
        }

        let placement = resolve_place(self.pending, self.technique, string_index, fret, self.cursor);

        let mut changed = false;
        for write in &placement.writes {
            changed |= self.doc.set_note(write.string_index, write.position, write.token);
        }
        self.pending = placement.pending;
        if placement.advance {
            self.advance_cursor();
        }
        if changed {
            self.mark_mutated();
        }
    }

    /// Clear one cell (the preview's click-to-remove action).
    pub fn remove_note(&mut self, string_index: usize, position: usize) {
        if self.doc.clear_cell(string_index, position) {
            self.mark_mutated();
        }
    }

    pub fn set_chord(&mut self, position: usize, label: &str) {
        if self.doc.set_chord(position, label) {
            self.mark_mutated();
        }
    }

    /// Chord entry for the host's input box, which edits at the cursor.
    pub fn set_chord_at_cursor(&mut self, label: &str) {
        let position = self.cursor;
        self.set_chord(position, label);
    }

    pub fn clear_chord(&mut self, position: usize) {
        if self.doc.clear_chord(position) {
            self.mark_mutated();
        }
    }

    /// Clear chord and notes at one position; cancels a pending technique.
    pub fn clear_position(&mut self, position: usize) {
        self.pending = None;
        if self.doc.clear_position(position) {
            self.mark_mutated();
        }
    }

    /// Destructive clear of the whole grid, gated on a host-supplied
    /// confirm capability. Returns whether the clear ran.
    pub fn clear_all<F: FnOnce() -> bool>(&mut self, confirm: F) -> bool {
        if !confirm() {
            return false;
        }
        self.pending = None;
        self.cursor = 0;
        self.doc.clear_all();
        self.mark_mutated();
        true
    }

    pub fn extend(&mut self, amount: usize) {
        if amount == 0 {
            return;
        }
        self.doc.extend(amount);
        self.mark_mutated();
    }

    /// Move the cursor by a signed delta, clamped to the grid. Cancels a
    /// pending technique. Returns the new position.
    pub fn move_cursor(&mut self, delta: isize) -> usize {
        self.pending = None;
        let max = self.doc.length.saturating_sub(1) as isize;
        let target = (self.cursor as isize).saturating_add(delta).clamp(0, max.max(0));
        self.cursor = target as usize;
        self.cursor
    }

    /// Jump to an absolute position, clamped. Cancels a pending technique.
    pub fn jump_to(&mut self, position: usize) -> usize {
        self.pending = None;
        self.cursor = position.min(self.doc.length.saturating_sub(1));
        self.cursor
    }

    /// Select the technique for subsequent placements. Cancels a pending
    /// technique.
    pub fn set_technique(&mut self, technique: TechniqueCode) {
        self.pending = None;
        self.technique = technique;
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Snapshot without touching the dirty flag.
    pub fn snapshot(&self) -> SavedTab {
        SavedTab::capture(&self.doc, self.cursor, self.technique)
    }

    /// Manual save: snapshot, mark clean, disarm the autosave timer.
    pub fn save(&mut self) -> SavedTab {
        let saved = self.snapshot();
        self.dirty = false;
        self.autosave.reset(self.revision);
        saved
    }

    /// Autosave poll. Yields a snapshot once the quiet period after the
    /// last mutation has elapsed, at most once per quiet period, and
    /// never while the session is clean.
    pub fn poll_autosave(&mut self, now_ms: f64) -> Option<SavedTab> {
        if !self.dirty {
            return None;
        }
        if self.autosave.poll(self.revision, now_ms) {
            Some(self.save())
        } else {
            None
        }
    }
}
