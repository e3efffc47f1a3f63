//! Column alignment
//!
//! Computes the minimum display width of every grid column so notes,
//! chords, and technique tokens of varying character length line up in
//! monospace rendering and export. Widths cover the observed grid, which
//! is at least the nominal capacity and never truncates data written
//! past it.

use crate::models::core::TabDocument;

/// Per-column display widths, indexed by position.
///
/// `widths[p] = max(1, longest note text at p across strings, chord
/// label length at p)`.
pub fn column_widths(doc: &TabDocument) -> Vec<usize> {
    let mut widths = vec![1usize; doc.max_observed_len()];
    for track in &doc.strings {
        for (&position, token) in &track.notes {
            widths[position] = widths[position].max(token.display_len());
        }
    }
    for (&position, label) in &doc.chords {
        widths[position] = widths[position].max(label.chars().count());
    }
    widths
}
