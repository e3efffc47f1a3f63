//! Utility modules for the Guitar Tab Editor

pub mod debounce;

pub use debounce::SaveDebouncer;
