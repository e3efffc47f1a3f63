//! Models module for the Guitar Tab Editor
//!
//! This module contains the data models for the string-grid tab
//! representation: the document, the cell token grammar, the technique
//! table, and the persisted envelope.

pub mod core;
pub mod persistence;
pub mod techniques;
pub mod token;

// Re-export commonly used types
pub use core::*;
pub use persistence::{LoadError, SavedGrid, SavedLine, SavedTab};
pub use techniques::{Arity, TechniqueCode, TechniqueSpec, TECHNIQUES};
pub use token::{Joiner, NoteToken, MAX_FRET};
