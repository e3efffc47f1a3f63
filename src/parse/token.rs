//! Token recognition for the tab cell grammar
//!
//! This module parses the textual form of a grid cell back into a
//! [`NoteToken`]. The grammar is tiny and fully enumerable: empty cell,
//! plain fret, mute, harmonic, bend/release/vibrato suffixes, and the
//! paired-technique form `a<sym>b` with `sym` one of `/ \ h p`.

use crate::models::token::{Joiner, NoteToken, MAX_FRET};

/// Parse a fret number in `0..=MAX_FRET`.
///
/// Rejects empty strings, non-digits, and out-of-range values. Leading
/// zeros beyond "0" itself ("03") are not canonical and are rejected.
pub fn parse_fret(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 2 {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() == 2 && text.starts_with('0') {
        return None;
    }
    match text.parse::<u8>() {
        Ok(fret) if fret <= MAX_FRET => Some(fret),
        _ => None,
    }
}

/// Strict parse of a cell's textual form.
///
/// Returns None for anything outside the grammar; callers that must be
/// total use [`sanitize_token`] instead.
pub fn parse_token(text: &str) -> Option<NoteToken> {
    match text {
        "" | "-" => return Some(NoteToken::Empty),
        "x" => return Some(NoteToken::Muted),
        _ => {}
    }

    // Harmonic: "<n>"
    if let Some(inner) = text.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        return parse_fret(inner).map(NoteToken::Harmonic);
    }

    // Single-note suffix forms: "n^r", "n^", "n~"
    if let Some(prefix) = text.strip_suffix("^r") {
        return parse_fret(prefix).map(NoteToken::Release);
    }
    if let Some(prefix) = text.strip_suffix('^') {
        return parse_fret(prefix).map(NoteToken::Bend);
    }
    if let Some(prefix) = text.strip_suffix('~') {
        return parse_fret(prefix).map(NoteToken::Vibrato);
    }

    // Paired form: digits, one joiner symbol, digits
    if let Some(split) = text.find(|c: char| !c.is_ascii_digit()) {
        let (from_text, rest) = text.split_at(split);
        let mut rest_chars = rest.chars();
        let symbol = rest_chars.next()?;
        let joiner = Joiner::from_symbol(symbol)?;
        let from = parse_fret(from_text)?;
        let to = parse_fret(rest_chars.as_str())?;
        return Some(NoteToken::Composite { from, to, joiner });
    }

    // All digits: plain fret
    parse_fret(text).map(NoteToken::Fretted)
}

/// Total version of [`parse_token`]: junk becomes Empty.
///
/// This is the sanitize rule applied to externally-loaded documents.
pub fn sanitize_token(text: &str) -> NoteToken {
    parse_token(text.trim()).unwrap_or_default()
}
