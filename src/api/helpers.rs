//! Shared helpers for WASM API operations
//!
//! Serialization across the JS boundary and error conversion, with every
//! failure logged before it is handed back to JavaScript.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::DiagramError;
use crate::models::DiagramConfig;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Read the per-draw configuration object passed by the host page.
///
/// `undefined`/`null` mean "all defaults".
pub fn read_config(value: JsValue) -> Result<DiagramConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(DiagramConfig::default());
    }
    deserialize(value, "Invalid diagram config")
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log a domain error and convert it to a JsValue
pub fn js_error(err: DiagramError) -> JsValue {
    log::error!("{}", err);
    err.into()
}
