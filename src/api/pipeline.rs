//! Parsing and layout entry points for JavaScript
//!
//! Thin wrappers over the parser and layout engine so the host page (and its
//! tests) can inspect intermediate results without drawing anything.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, read_config, serialize};
use crate::models::{Frame, Period};
use crate::parse::interval;
use crate::renderers::{build_live_scene, layout_engine};

/// Parse one interval token; returns `undefined` when the line is skipped
#[wasm_bindgen(js_name = parseToken)]
pub fn parse_token(text: &str) -> Result<JsValue, JsValue> {
    match interval::parse_token(text) {
        Some(token) => serialize(&token, "Failed to serialize token"),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Parse the period field to cents (`NaN` when empty or unparseable)
#[wasm_bindgen(js_name = parsePeriod)]
pub fn parse_period(text: &str) -> f64 {
    interval::parse_period(text)
}

/// Compute the canonical frame for an available drawing area
#[wasm_bindgen(js_name = computeFrame)]
pub fn compute_frame(
    available_width: f64,
    available_height: f64,
    size_multiplier: f64,
) -> Result<JsValue, JsValue> {
    let frame = layout_engine::compute_frame(available_width, available_height, size_multiplier);
    serialize(&frame, "Failed to serialize frame")
}

/// Place the period and intervals on a frame previously returned by `computeFrame`
#[wasm_bindgen(js_name = buildItems)]
pub fn build_items(
    period_text: &str,
    intervals_text: &str,
    frame: JsValue,
    period_cents: f64,
) -> Result<JsValue, JsValue> {
    let frame: Frame = deserialize(frame, "Invalid frame")?;
    if !Period::is_usable_cents(period_cents) {
        return Err(JsValue::from_str("buildItems requires a finite, non-zero period"));
    }

    let items = layout_engine::build_items(period_text, intervals_text, &frame, period_cents);
    serialize(&items, "Failed to serialize items")
}

/// Scene description for the live view, for hosts that draw it themselves
#[wasm_bindgen(js_name = buildLiveScene)]
pub fn build_live_scene_js(
    config: JsValue,
    panel_width: f64,
    panel_height: f64,
) -> Result<JsValue, JsValue> {
    let config = read_config(config)?;
    let scene = build_live_scene(&config, panel_width, panel_height);
    serialize(&scene, "Failed to serialize scene")
}
