//! Renderers module for the pitch circle
//!
//! Layout (frame and item placement), scene construction, and the output
//! adapters: SVG serialization and canvas rasterization.

pub mod layout_engine;
pub mod display_list;
pub mod scene;
pub mod svg;
pub mod raster;

// Re-export commonly used types
pub use display_list::{Scene, SceneElement};
pub use layout_engine::{build_items, compute_angle, compute_frame, export_frame, live_frame, point_on_circle};
pub use scene::{blank_scene, build_export_scene, build_live_scene, build_scene};
pub use svg::SVGRenderer;
