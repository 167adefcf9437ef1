//! Error types for diagram construction and export
//!
//! Most input problems never surface as errors: unparseable interval lines are
//! dropped and an invalid period degrades to a blank canvas. These variants
//! cover the cases a caller can still act on or that must be logged.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    /// Period text is empty, unparseable, zero or non-finite
    #[error("Invalid period: '{0}'")]
    InvalidPeriod(String),

    /// Export format name not recognised
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The browser could not decode the SVG for rasterization
    #[error("Image decode failed: {0}")]
    RasterDecode(String),

    /// A DOM lookup or mutation failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<DiagramError> for JsValue {
    fn from(err: DiagramError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
