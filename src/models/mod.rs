//! Models module for the pitch circle
//!
//! Parsed tokens, geometry shared by both rendering modes, and the per-draw
//! configuration snapshot.

pub mod config;
pub mod geometry;
pub mod interval;

// Re-export commonly used types
pub use config::{DiagramConfig, ExportFormat};
pub use geometry::{Frame, PlacedItem, Point, Size};
pub use interval::{IntervalKind, IntervalToken, Period};
