//! Core data structures for the Guitar Tab Editor
//!
//! This module defines the string-grid document model: six string tracks
//! of sparse position-indexed note tokens plus a sparse chord label row.
//! Sparse maps replace the dense pre-filled arrays of the original editor,
//! so capacity and written data are independent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::token::NoteToken;

/// A guitar tab always has six strings.
pub const STRING_COUNT: usize = 6;

/// Default number of addressable positions in a new document.
pub const DEFAULT_TAB_LENGTH: usize = 32;

/// Positions added by one host-driven "extend" action.
pub const EXTEND_STEP: usize = 16;

/// Display labels, high to low pitch.
pub const STANDARD_TUNING: [&str; STRING_COUNT] = ["e", "B", "G", "D", "A", "E"];

/// One string of the tab: a fixed display label plus a sparse map from
/// position index to the token sounding there. Absent = Empty ("-").
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StringTrack {
    pub label: String,
    pub notes: BTreeMap<usize, NoteToken>,
}

impl StringTrack {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            notes: BTreeMap::new(),
        }
    }

    /// Token at a position; Empty when nothing is written there.
    pub fn note_at(&self, position: usize) -> NoteToken {
        self.notes.get(&position).copied().unwrap_or_default()
    }

    /// Highest position with a written token, if any.
    pub fn max_written_position(&self) -> Option<usize> {
        self.notes.keys().next_back().copied()
    }
}

/// The tab grid: ordered positions (columns) × six strings, plus a chord
/// label row. All operations are total; invalid inputs are ignored or
/// clamped, never an error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TabDocument {
    /// Nominal addressable positions; grows via `extend`, never shrinks
    pub length: usize,
    /// Sparse chord labels above the grid
    pub chords: BTreeMap<usize, String>,
    /// Exactly six strings, high e to low E
    pub strings: Vec<StringTrack>,
}

impl Default for TabDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TabDocument {
    /// Empty document at the default capacity, standard tuning.
    pub fn new() -> Self {
        Self::with_length(DEFAULT_TAB_LENGTH)
    }

    /// Empty document with an explicit capacity.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            chords: BTreeMap::new(),
            strings: STANDARD_TUNING.iter().map(|label| StringTrack::new(label)).collect(),
        }
    }

    /// Write a token at a cell. Returns whether the grid changed.
    ///
    /// Writing Empty removes the entry (any position). Non-empty writes
    /// beyond `length` or to an unknown string are ignored: direct
    /// addressing never grows the grid.
    pub fn set_note(&mut self, string_index: usize, position: usize, token: NoteToken) -> bool {
        let length = self.length;
        let track = match self.strings.get_mut(string_index) {
            Some(track) => track,
            None => return false,
        };
        if token.is_empty() {
            return track.notes.remove(&position).is_some();
        }
        if position >= length {
            return false;
        }
        track.notes.insert(position, token) != Some(token)
    }

    /// Reset a cell to Empty. Total: clears data past `length` too.
    pub fn clear_cell(&mut self, string_index: usize, position: usize) -> bool {
        match self.strings.get_mut(string_index) {
            Some(track) => track.notes.remove(&position).is_some(),
            None => false,
        }
    }

    pub fn note_at(&self, string_index: usize, position: usize) -> NoteToken {
        self.strings
            .get(string_index)
            .map(|track| track.note_at(position))
            .unwrap_or_default()
    }

    /// Set the chord label at a position; blank labels clear it.
    pub fn set_chord(&mut self, position: usize, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return self.chords.remove(&position).is_some();
        }
        if position >= self.length {
            return false;
        }
        self.chords.insert(position, label.to_string()).as_deref() != Some(label)
    }

    pub fn clear_chord(&mut self, position: usize) -> bool {
        self.chords.remove(&position).is_some()
    }

    pub fn chord_at(&self, position: usize) -> Option<&str> {
        self.chords.get(&position).map(String::as_str)
    }

    /// Clear the chord and every string's note at one position only.
    pub fn clear_position(&mut self, position: usize) -> bool {
        let mut changed = self.chords.remove(&position).is_some();
        for track in &mut self.strings {
            changed |= track.notes.remove(&position).is_some();
        }
        changed
    }

    /// Reset to the empty document, preserving `length`.
    pub fn clear_all(&mut self) {
        self.chords.clear();
        for track in &mut self.strings {
            track.notes.clear();
        }
    }

    /// Grow the grid; never destructive.
    pub fn extend(&mut self, amount: usize) {
        self.length = self.length.saturating_add(amount);
    }

    /// Columns the grid occupies for display and export: at least the
    /// nominal capacity, and never truncating data written past it
    /// (loaded documents may carry such data).
    pub fn max_observed_len(&self) -> usize {
        let mut len = self.length;
        for track in &self.strings {
            if let Some(last) = track.max_written_position() {
                len = len.max(last + 1);
            }
        }
        if let Some(last) = self.chords.keys().next_back() {
            len = len.max(last + 1);
        }
        len
    }
}
