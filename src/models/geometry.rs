//! Geometric types shared by the live view and the export path

use serde::{Deserialize, Serialize};

use super::interval::IntervalKind;

/// A position in canvas pixels (y grows downwards)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Canvas dimensions in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Canonical drawing frame
///
/// Both consumption modes obtain their frame from the layout engine, so a
/// live diagram and its export share the same radius for the same inputs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub canvas_size: Size,
    pub center: Point,
    pub radius: f64,
}

/// An interval (or the period) with its position on the circle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    pub cents: f64,
    pub display_label: String,
    pub kind: IntervalKind,

    /// True only for the first item, which always sits at the top
    pub is_period: bool,

    /// Clockwise from 12 o'clock, in `[0, 360)`
    pub angle_deg: f64,

    pub x: f64,
    pub y: f64,
}

impl PlacedItem {
    pub fn position(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}
