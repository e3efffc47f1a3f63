//! Plain-text tab serializer
//!
//! Renders a document into the canonical monospace export block: one
//! chord line, then one line per string formatted
//! `<label>|<cell_0><cell_1>...|`. Cells are right-padded to the column
//! widths from the alignment calculator (spaces on the chord line,
//! dashes on string lines) and literal content is never truncated even
//! when longer than its column. The format is write-only and must stay
//! byte-for-byte stable across releases; prior exports are diffed against
//! new ones by users.

use crate::models::core::TabDocument;
use crate::renderers::layout::column_widths;

/// Append `text` right-padded with `fill` to `width` characters.
fn push_padded(out: &mut String, text: &str, width: usize, fill: char) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(fill);
    }
}

/// Render the full export block. Pure read; serializing twice without a
/// mutation in between yields byte-identical output.
pub fn render_tab_text(doc: &TabDocument) -> String {
    let widths = column_widths(doc);
    let label_width = doc
        .strings
        .iter()
        .map(|track| track.label.chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();

    // Chord line, aligned over the `<label>|` prefix of the string lines
    for _ in 0..label_width + 1 {
        out.push(' ');
    }
    for (position, &width) in widths.iter().enumerate() {
        push_padded(&mut out, doc.chord_at(position).unwrap_or_default(), width, ' ');
    }
    out.push('\n');

    for track in &doc.strings {
        push_padded(&mut out, &track.label, label_width, ' ');
        out.push('|');
        for (position, &width) in widths.iter().enumerate() {
            let token = track.note_at(position);
            push_padded(&mut out, &token.to_string(), width, '-');
        }
        out.push('|');
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::{Joiner, NoteToken};

    #[test]
    fn test_empty_document_layout() {
        let doc = TabDocument::with_length(4);
        let text = render_tab_text(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "      ");
        assert_eq!(lines[1], "e|----|");
        assert_eq!(lines[6], "E|----|");
    }

    #[test]
    fn test_alignment_pads_every_line() {
        let mut doc = TabDocument::with_length(3);
        doc.set_chord(0, "Am");
        doc.set_note(0, 0, NoteToken::Fretted(10));
        doc.set_note(1, 0, NoteToken::Fretted(3));

        let text = render_tab_text(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  Am  ");
        assert_eq!(lines[1], "e|10--|");
        assert_eq!(lines[2], "B|3---|");
        assert_eq!(lines[3], "G|----|");
    }

    #[test]
    fn test_composite_tokens_widen_their_column() {
        let mut doc = TabDocument::with_length(3);
        doc.set_note(2, 1, NoteToken::Composite {
            from: 3,
            to: 5,
            joiner: Joiner::SlideUp,
        });
        doc.set_note(0, 1, NoteToken::Fretted(0));

        let text = render_tab_text(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "e|-0---|");
        assert_eq!(lines[3], "G|-3/5-|");
        assert_eq!(lines[6], "E|-----|");
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut doc = TabDocument::with_length(8);
        doc.set_chord(2, "Em");
        doc.set_note(3, 2, NoteToken::Harmonic(7));
        doc.set_note(4, 5, NoteToken::Release(10));
        let first = render_tab_text(&doc);
        let second = render_tab_text(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_renders_data_past_nominal_capacity() {
        let mut doc = TabDocument::with_length(2);
        doc.strings[5].notes.insert(3, NoteToken::Muted);
        let text = render_tab_text(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "E|---x|");
        assert_eq!(lines[1], "e|----|");
    }
}
