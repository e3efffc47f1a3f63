//! Shared helpers for WASM API operations
//!
//! Console logging, the WASM-owned session storage, and serialization
//! helpers used across all API operations.

use lazy_static::lazy_static;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

use crate::edit::EditSession;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] {}", msg));
}

// ============================================================================
// WASM-Owned Session Storage
// ============================================================================

// The editor session is the canonical source of truth while editing; the
// host only ever sees snapshots.
lazy_static! {
    pub static ref SESSION: Mutex<Option<EditSession>> = Mutex::new(None);
}

/// Lock the session storage.
pub fn lock_session() -> Result<MutexGuard<'static, Option<EditSession>>, JsValue> {
    SESSION
        .lock()
        .map_err(|_| JsValue::from_str("Editor session lock poisoned"))
}

/// Run a closure against the loaded session, erroring if none is loaded.
pub fn with_session<T>(
    f: impl FnOnce(&mut EditSession) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let mut guard = lock_session()?;
    let session = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No tab document loaded"))?;
    f(session)
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}
