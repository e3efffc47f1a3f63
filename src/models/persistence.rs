//! Persisted document envelope
//!
//! The external store keeps the tab as an opaque JSON blob in the shape
//! the original JavaScript editor wrote: dense token-text arrays per
//! string, a dense chord array, plus cursor, selected technique, and
//! capacity. Loading is sanitizing end to end: wrong string counts,
//! junk tokens, null array slots, and out-of-range cursors are repaired,
//! never surfaced as errors. Only unparseable JSON fails.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::models::core::{StringTrack, TabDocument, DEFAULT_TAB_LENGTH, STANDARD_TUNING};
use crate::models::techniques::TechniqueCode;
use crate::models::token::NoteToken;

/// Load failure: the blob was not valid JSON at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid tab document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One persisted string line: label plus dense token texts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SavedLine {
    #[serde(default, deserialize_with = "lenient_label")]
    pub string: String,
    #[serde(default, deserialize_with = "lenient_notes")]
    pub notes: Vec<NoteToken>,
}

/// The persisted grid: chord row plus six string lines.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SavedGrid {
    #[serde(default, deserialize_with = "lenient_labels")]
    pub chords: Vec<String>,
    #[serde(default)]
    pub lines: Vec<SavedLine>,
}

/// The full persisted envelope handed to the save collaborator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedTab {
    #[serde(default)]
    pub tab: SavedGrid,
    #[serde(default)]
    pub current_position: usize,
    #[serde(default)]
    pub selected_technique: TechniqueCode,
    #[serde(default = "default_tab_length")]
    pub tab_length: usize,
}

fn default_tab_length() -> usize {
    DEFAULT_TAB_LENGTH
}

impl Default for SavedTab {
    fn default() -> Self {
        Self {
            tab: SavedGrid::default(),
            current_position: 0,
            selected_technique: TechniqueCode::default(),
            tab_length: DEFAULT_TAB_LENGTH,
        }
    }
}

// Old saves serialized sparse JavaScript arrays, so string slots may be
// null or stray non-strings; treat those as absent labels.

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::String(s) => s,
            _ => String::new(),
        })
        .collect())
}

fn lenient_notes<'de, D>(deserializer: D) -> Result<Vec<NoteToken>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<NoteToken>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SavedTab {
    /// Snapshot a document plus session state into the persisted shape.
    ///
    /// Note arrays are dense up to each string's highest written position;
    /// the chord array likewise. Empty cells serialize as "-".
    pub fn capture(doc: &TabDocument, cursor: usize, technique: TechniqueCode) -> Self {
        let lines = doc
            .strings
            .iter()
            .map(|track| SavedLine {
                string: track.label.clone(),
                notes: match track.max_written_position() {
                    Some(last) => (0..=last).map(|p| track.note_at(p)).collect(),
                    None => Vec::new(),
                },
            })
            .collect();

        let chords = match doc.chords.keys().next_back().copied() {
            Some(last) => (0..=last)
                .map(|p| doc.chord_at(p).unwrap_or_default().to_string())
                .collect(),
            None => Vec::new(),
        };

        Self {
            tab: SavedGrid { chords, lines },
            current_position: cursor,
            selected_technique: technique,
            tab_length: doc.length,
        }
    }

    /// Rebuild a document plus session state, sanitizing as needed:
    /// missing or surplus string lines are squared against standard
    /// tuning, blank labels defaulted, the cursor clamped into range,
    /// and a zero capacity bumped to the default.
    pub fn restore(&self) -> (TabDocument, usize, TechniqueCode) {
        let length = if self.tab_length == 0 {
            DEFAULT_TAB_LENGTH
        } else {
            self.tab_length
        };
        let mut doc = TabDocument::with_length(length);

        for (string_index, track) in doc.strings.iter_mut().enumerate() {
            let line = self.tab.lines.get(string_index);
            let label = line
                .map(|l| l.string.trim())
                .filter(|label| !label.is_empty())
                .unwrap_or(STANDARD_TUNING[string_index]);
            *track = StringTrack::new(label);
            if let Some(line) = line {
                for (position, &token) in line.notes.iter().enumerate() {
                    if !token.is_empty() {
                        track.notes.insert(position, token);
                    }
                }
            }
        }

        for (position, label) in self.tab.chords.iter().enumerate() {
            let label = label.trim();
            if !label.is_empty() {
                doc.chords.insert(position, label.to_string());
            }
        }

        let cursor = self.current_position.min(length.saturating_sub(1));
        (doc, cursor, self.selected_technique)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string(self)?)
    }
}
