//! Pitch-Class Circle WASM Module
//!
//! Parses period and interval text (cents or frequency ratios), lays the
//! intervals out on a circle and renders the diagram either into a live
//! on-page SVG element or into a self-contained SVG/PNG/JPEG export.

pub mod error;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use error::DiagramError;
pub use models::*;
pub use parse::interval::{parse_intervals, parse_period, parse_token, period_label};
pub use renderers::layout_engine::{build_items, compute_angle, compute_frame, export_frame, live_frame};
pub use renderers::scene::{build_export_scene, build_live_scene, build_scene};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A logger is already installed (module re-initialized by the host page)
        return;
    }

    log::info!("Pitch circle WASM module initialized");
}
