//! Renderers module for the Guitar Tab Editor
//!
//! Pure read-side views over the document: column alignment and the
//! monospace text export.

pub mod layout;
pub mod tab_text;

pub use layout::column_widths;
pub use tab_text::render_tab_text;
