//! Technique resolver
//!
//! The two-state machine that turns a single "place note" intent into one
//! or two cell writes. Paired techniques (slides, hammer-ons, pull-offs)
//! span two clicks: the first records an origin and writes a provisional
//! plain note, the second rewrites the origin as a composite token and
//! places the target note on its own column.
//!
//! The resolver is a pure transition function over the technique table;
//! it never touches the grid itself. The session applies the returned
//! placement, which keeps the state machine testable in isolation and
//! replaces the four divergent copies of this logic in the original
//! editor with one canonical implementation.

use serde::{Deserialize, Serialize};

use crate::models::techniques::{Arity, TechniqueCode};
use crate::models::token::{NoteToken, MAX_FRET};

/// The AwaitingTarget state payload: where a paired technique started.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingTechnique {
    pub string_index: usize,
    pub origin_position: usize,
    pub origin_fret: u8,
    pub technique: TechniqueCode,
}

/// One cell write produced by a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellWrite {
    pub string_index: usize,
    pub position: usize,
    pub token: NoteToken,
}

/// Everything a single place-note intent resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Cell writes to apply, in order
    pub writes: Vec<CellWrite>,
    /// Next pending-technique state
    pub pending: Option<PendingTechnique>,
    /// Whether the cursor advances after applying the writes
    pub advance: bool,
}

/// Token a single-arity technique writes for a given fret.
fn single_token(technique: TechniqueCode, fret: u8) -> NoteToken {
    match technique {
        TechniqueCode::Mute => NoteToken::Muted,
        TechniqueCode::Harmonic => NoteToken::Harmonic(fret),
        TechniqueCode::Bend => NoteToken::Bend(fret),
        TechniqueCode::Release => NoteToken::Release(fret),
        TechniqueCode::Vibrato => NoteToken::Vibrato(fret),
        _ => NoteToken::Fretted(fret),
    }
}

/// Resolve one place-note intent.
///
/// `pending` is the current state (None = Idle), `technique` the selected
/// technique, `cursor` the position being written. Frets are clamped to
/// `0..=MAX_FRET`.
///
/// While a technique is pending, a click on a different string aborts it:
/// the pending state is discarded, nothing is written for this call, and
/// the cursor holds so the caller can re-issue the click as a fresh note.
pub fn resolve_place(
    pending: Option<PendingTechnique>,
    technique: TechniqueCode,
    string_index: usize,
    fret: u8,
    cursor: usize,
) -> Placement {
    let fret = fret.min(MAX_FRET);

    if let Some(origin) = pending {
        if origin.string_index != string_index {
            return Placement {
                writes: Vec::new(),
                pending: None,
                advance: false,
            };
        }

        let mut writes = Vec::with_capacity(2);
        if let Some(joiner) = origin.technique.joiner() {
            writes.push(CellWrite {
                string_index,
                position: origin.origin_position,
                token: NoteToken::Composite {
                    from: origin.origin_fret,
                    to: fret,
                    joiner,
                },
            });
        }
        // The target note stays visible on its own column. When the cursor
        // could not advance past the origin (origin was the last position)
        // the composite already encodes the target, so skip the write that
        // would clobber it.
        if cursor != origin.origin_position {
            writes.push(CellWrite {
                string_index,
                position: cursor,
                token: NoteToken::Fretted(fret),
            });
        }
        return Placement {
            writes,
            pending: None,
            advance: true,
        };
    }

    match technique.arity() {
        Arity::Single => Placement {
            writes: vec![CellWrite {
                string_index,
                position: cursor,
                token: single_token(technique, fret),
            }],
            pending: None,
            advance: true,
        },
        Arity::Paired => Placement {
            writes: vec![CellWrite {
                string_index,
                position: cursor,
                token: NoteToken::Fretted(fret),
            }],
            pending: Some(PendingTechnique {
                string_index,
                origin_position: cursor,
                origin_fret: fret,
                technique,
            }),
            advance: true,
        },
    }
}
