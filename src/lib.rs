//! Guitar Tab Editor WASM Module
//!
//! This is the main WASM module for the guitar tablature notation engine.
//! It provides the string-grid document model, the two-phase technique
//! state machine, column alignment, and plain-text export for the
//! song-tracking web app's embedded tab editor.

pub mod api;
pub mod edit;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use edit::{EditSession, PendingTechnique};
pub use models::core::*;
pub use models::techniques::*;
pub use models::token::*;
pub use models::{LoadError, SavedTab};
pub use renderers::{column_widths, render_tab_text};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Guitar Tab Editor WASM module initialized");
}
