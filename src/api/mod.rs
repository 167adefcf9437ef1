//! Pitch Circle WASM API
//!
//! JavaScript-facing functions, organized by concern:
//!
//! - `helpers`: serialization, config decoding and error conversion
//! - `pipeline`: parser and layout entry points
//! - `live`: on-page rendering into an `<svg>` element
//! - `export`: SVG/PNG/JPEG export and download

pub mod helpers;
pub mod pipeline;
pub mod live;
pub mod export;

pub use pipeline::*;
pub use live::render_live;
pub use export::{export_diagram, export_svg, export_svg_document, scene_to_json};
