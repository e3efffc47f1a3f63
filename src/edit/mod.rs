//! Editing module for the Guitar Tab Editor
//!
//! The technique resolver state machine and the session orchestrator
//! that applies it to the document.

pub mod resolver;
pub mod session;

pub use resolver::{resolve_place, CellWrite, Placement, PendingTechnique};
pub use session::{EditSession, SAVE_DEBOUNCE_MS};
