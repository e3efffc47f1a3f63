//! NoteToken cell grammar
//!
//! This module defines the tagged value stored in a single grid cell and
//! its canonical textual form. Parsing of the textual form lives in
//! `crate::parse::token`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Highest playable fret recognized by the engine (0 = open string).
pub const MAX_FRET: u8 = 22;

/// Connector between the two fret numbers of a paired technique token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Joiner {
    /// Ascending slide ("3/5")
    SlideUp,
    /// Descending slide ("5\3")
    SlideDown,
    /// Hammer-on ("3h5")
    HammerOn,
    /// Pull-off ("5p3")
    PullOff,
}

impl Joiner {
    /// The single character joining the two fret numbers.
    pub fn symbol(self) -> char {
        match self {
            Joiner::SlideUp => '/',
            Joiner::SlideDown => '\\',
            Joiner::HammerOn => 'h',
            Joiner::PullOff => 'p',
        }
    }

    /// Map a connector character back to its joiner.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '/' => Some(Joiner::SlideUp),
            '\\' => Some(Joiner::SlideDown),
            'h' => Some(Joiner::HammerOn),
            'p' => Some(Joiner::PullOff),
            _ => None,
        }
    }
}

/// What one string sounds at one grid position.
///
/// Composite covers the whole paired-technique family (slides, hammer-ons,
/// pull-offs) keyed by [`Joiner`], so technique handling stays table-driven
/// instead of one code path per symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoteToken {
    /// Nothing played ("-")
    #[default]
    Empty,
    /// Plain fret number, 0 = open string
    Fretted(u8),
    /// Percussive mute ("x")
    Muted,
    /// Natural harmonic ("<5>")
    Harmonic(u8),
    /// Bend up ("3^")
    Bend(u8),
    /// Bend then release ("3^r")
    Release(u8),
    /// Vibrato ("3~")
    Vibrato(u8),
    /// Two-note technique ("3/5", "5\3", "3h5", "5p3")
    Composite { from: u8, to: u8, joiner: Joiner },
}

/// Column width a fret number occupies ("7" vs "12").
fn fret_width(fret: u8) -> usize {
    if fret >= 10 {
        2
    } else {
        1
    }
}

impl NoteToken {
    /// True for the Empty ("-") token.
    pub fn is_empty(self) -> bool {
        self == NoteToken::Empty
    }

    /// Character count of the canonical textual form.
    ///
    /// All token text is ASCII, so this equals the rendered column width.
    pub fn display_len(self) -> usize {
        match self {
            NoteToken::Empty | NoteToken::Muted => 1,
            NoteToken::Fretted(fret) => fret_width(fret),
            NoteToken::Harmonic(fret) => fret_width(fret) + 2,
            NoteToken::Bend(fret) | NoteToken::Vibrato(fret) => fret_width(fret) + 1,
            NoteToken::Release(fret) => fret_width(fret) + 2,
            NoteToken::Composite { from, to, .. } => fret_width(from) + fret_width(to) + 1,
        }
    }
}

impl fmt::Display for NoteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NoteToken::Empty => write!(f, "-"),
            NoteToken::Fretted(fret) => write!(f, "{}", fret),
            NoteToken::Muted => write!(f, "x"),
            NoteToken::Harmonic(fret) => write!(f, "<{}>", fret),
            NoteToken::Bend(fret) => write!(f, "{}^", fret),
            NoteToken::Release(fret) => write!(f, "{}^r", fret),
            NoteToken::Vibrato(fret) => write!(f, "{}~", fret),
            NoteToken::Composite { from, to, joiner } => {
                write!(f, "{}{}{}", from, joiner.symbol(), to)
            }
        }
    }
}

// Tokens cross the persistence boundary as their textual form. Documents
// saved by the old JavaScript editor sometimes stored bare numbers, so
// deserialization also accepts integers; anything unrecognizable becomes
// Empty rather than failing the whole load.

impl Serialize for NoteToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct NoteTokenVisitor;

impl<'de> Visitor<'de> for NoteTokenVisitor {
    type Value = NoteToken;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a note token string or fret number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<NoteToken, E> {
        Ok(crate::parse::token::sanitize_token(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<NoteToken, E> {
        if value <= MAX_FRET as u64 {
            Ok(NoteToken::Fretted(value as u8))
        } else {
            Ok(NoteToken::Empty)
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<NoteToken, E> {
        if value >= 0 {
            self.visit_u64(value as u64)
        } else {
            Ok(NoteToken::Empty)
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<NoteToken, E> {
        if value.fract() == 0.0 && value >= 0.0 && value <= MAX_FRET as f64 {
            Ok(NoteToken::Fretted(value as u8))
        } else {
            Ok(NoteToken::Empty)
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<NoteToken, E> {
        Ok(NoteToken::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<NoteToken, E> {
        Ok(NoteToken::Empty)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<NoteToken, E> {
        Ok(NoteToken::Empty)
    }
}

impl<'de> Deserialize<'de> for NoteToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NoteTokenVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_forms() {
        assert_eq!(NoteToken::Empty.to_string(), "-");
        assert_eq!(NoteToken::Fretted(0).to_string(), "0");
        assert_eq!(NoteToken::Fretted(12).to_string(), "12");
        assert_eq!(NoteToken::Muted.to_string(), "x");
        assert_eq!(NoteToken::Harmonic(5).to_string(), "<5>");
        assert_eq!(NoteToken::Bend(3).to_string(), "3^");
        assert_eq!(NoteToken::Release(3).to_string(), "3^r");
        assert_eq!(NoteToken::Vibrato(7).to_string(), "7~");
        let slide = NoteToken::Composite {
            from: 3,
            to: 5,
            joiner: Joiner::SlideUp,
        };
        assert_eq!(slide.to_string(), "3/5");
        let pull = NoteToken::Composite {
            from: 5,
            to: 3,
            joiner: Joiner::PullOff,
        };
        assert_eq!(pull.to_string(), "5p3");
    }

    #[test]
    fn test_display_len_matches_text_length() {
        let tokens = [
            NoteToken::Empty,
            NoteToken::Fretted(0),
            NoteToken::Fretted(22),
            NoteToken::Muted,
            NoteToken::Harmonic(12),
            NoteToken::Bend(9),
            NoteToken::Release(10),
            NoteToken::Vibrato(2),
            NoteToken::Composite {
                from: 10,
                to: 12,
                joiner: Joiner::HammerOn,
            },
        ];
        for token in tokens {
            assert_eq!(token.display_len(), token.to_string().chars().count());
        }
    }

    #[test]
    fn test_serde_uses_textual_form() {
        let json = serde_json::to_string(&NoteToken::Composite {
            from: 3,
            to: 5,
            joiner: Joiner::SlideUp,
        })
        .unwrap();
        assert_eq!(json, "\"3/5\"");

        let token: NoteToken = serde_json::from_str("\"5\\\\3\"").unwrap();
        assert_eq!(
            token,
            NoteToken::Composite {
                from: 5,
                to: 3,
                joiner: Joiner::SlideDown,
            }
        );
    }

    #[test]
    fn test_deserialize_tolerates_legacy_values() {
        // Old JavaScript saves stored bare numbers for plain notes
        let token: NoteToken = serde_json::from_str("7").unwrap();
        assert_eq!(token, NoteToken::Fretted(7));

        // Junk sanitizes to Empty instead of failing the load
        let token: NoteToken = serde_json::from_str("\"banana\"").unwrap();
        assert_eq!(token, NoteToken::Empty);
        let token: NoteToken = serde_json::from_str("null").unwrap();
        assert_eq!(token, NoteToken::Empty);
        let token: NoteToken = serde_json::from_str("99").unwrap();
        assert_eq!(token, NoteToken::Empty);
    }
}
