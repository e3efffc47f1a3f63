//! Parsing module for the Guitar Tab Editor
//!
//! Token recognition for the cell grammar lives here, kept apart from the
//! data model so the grammar can be exercised on its own.

pub mod token;

pub use token::{parse_fret, parse_token, sanitize_token};
