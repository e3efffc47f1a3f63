//! Playing technique codes and the declarative technique table
//!
//! The four source variants of the original editor each hard-coded their
//! own technique handling; here a single table drives token construction,
//! the resolver's arity decisions, and the host UI's selector/legend.

use once_cell::sync::Lazy;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use crate::models::token::Joiner;

/// Technique selected in the editor when placing a note.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TechniqueCode {
    #[default]
    Normal,
    SlideUp,
    SlideDown,
    HammerOn,
    PullOff,
    Bend,
    Release,
    Vibrato,
    Mute,
    Harmonic,
}

/// How many note placements a technique consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// One click writes one finished token
    Single,
    /// First click records an origin, second click completes the token
    Paired,
}

/// One row of the technique table.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TechniqueSpec {
    /// Persisted/API code; serializes as its camelCase id
    #[serde(rename = "value")]
    pub code: TechniqueCode,
    /// Notation symbol shown in the host legend
    pub symbol: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
    #[serde(skip)]
    pub arity: Arity,
}

/// The full technique table, in the order the host UI presents it.
pub const TECHNIQUES: [TechniqueSpec; 10] = [
    TechniqueSpec {
        code: TechniqueCode::Normal,
        symbol: "",
        label: "Normal",
        desc: "Standard note",
        arity: Arity::Single,
    },
    TechniqueSpec {
        code: TechniqueCode::SlideUp,
        symbol: "/",
        label: "Slide Up",
        desc: "Slide up (3/5)",
        arity: Arity::Paired,
    },
    TechniqueSpec {
        code: TechniqueCode::SlideDown,
        symbol: "\\",
        label: "Slide Down",
        desc: "Slide down (5\\3)",
        arity: Arity::Paired,
    },
    TechniqueSpec {
        code: TechniqueCode::HammerOn,
        symbol: "h",
        label: "Hammer-On",
        desc: "Hammer-on (3h5)",
        arity: Arity::Paired,
    },
    TechniqueSpec {
        code: TechniqueCode::PullOff,
        symbol: "p",
        label: "Pull-Off",
        desc: "Pull-off (5p3)",
        arity: Arity::Paired,
    },
    TechniqueSpec {
        code: TechniqueCode::Bend,
        symbol: "^",
        label: "Bend",
        desc: "Bend (3^)",
        arity: Arity::Single,
    },
    TechniqueSpec {
        code: TechniqueCode::Release,
        symbol: "r",
        label: "Release",
        desc: "Bend release (3^r)",
        arity: Arity::Single,
    },
    TechniqueSpec {
        code: TechniqueCode::Vibrato,
        symbol: "~",
        label: "Vibrato",
        desc: "Vibrato (3~)",
        arity: Arity::Single,
    },
    TechniqueSpec {
        code: TechniqueCode::Mute,
        symbol: "x",
        label: "Mute",
        desc: "Muted note (x)",
        arity: Arity::Single,
    },
    TechniqueSpec {
        code: TechniqueCode::Harmonic,
        symbol: "<>",
        label: "Harmonic",
        desc: "Natural harmonic (<5>)",
        arity: Arity::Single,
    },
];

static BY_ID: Lazy<HashMap<&'static str, TechniqueCode>> = Lazy::new(|| {
    TECHNIQUES
        .iter()
        .map(|spec| (spec.code.id(), spec.code))
        .collect()
});

impl TechniqueCode {
    /// The camelCase code used in the persisted envelope and the JS API.
    pub fn id(self) -> &'static str {
        match self {
            TechniqueCode::Normal => "normal",
            TechniqueCode::SlideUp => "slideUp",
            TechniqueCode::SlideDown => "slideDown",
            TechniqueCode::HammerOn => "hammerOn",
            TechniqueCode::PullOff => "pullOff",
            TechniqueCode::Bend => "bend",
            TechniqueCode::Release => "release",
            TechniqueCode::Vibrato => "vibrato",
            TechniqueCode::Mute => "mute",
            TechniqueCode::Harmonic => "harmonic",
        }
    }

    /// Look up a code by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        BY_ID.get(id).copied()
    }

    /// This code's row in the technique table.
    pub fn spec(self) -> &'static TechniqueSpec {
        TECHNIQUES
            .iter()
            .find(|spec| spec.code == self)
            .unwrap_or(&TECHNIQUES[0])
    }

    pub fn arity(self) -> Arity {
        self.spec().arity
    }

    /// The token connector for paired techniques, None for single ones.
    pub fn joiner(self) -> Option<Joiner> {
        match self {
            TechniqueCode::SlideUp => Some(Joiner::SlideUp),
            TechniqueCode::SlideDown => Some(Joiner::SlideDown),
            TechniqueCode::HammerOn => Some(Joiner::HammerOn),
            TechniqueCode::PullOff => Some(Joiner::PullOff),
            _ => None,
        }
    }
}

// Persisted as the camelCase id; unknown ids in loaded documents sanitize
// to Normal rather than failing the load.

impl Serialize for TechniqueCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for TechniqueCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = TechniqueCode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a technique code string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TechniqueCode, E> {
                Ok(TechniqueCode::from_id(value).unwrap_or_default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<TechniqueCode, E> {
                Ok(TechniqueCode::default())
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
