//! Display List for circle rendering
//!
//! The scene is an immutable list of drawing primitives in paint order. It is
//! built once per draw and handed to a presentation adapter (the live DOM
//! adapter or the SVG serializer); neither adapter performs any geometry.

use serde::{Deserialize, Serialize};

/// Complete drawable scene
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// Primitives in paint order (background first, labels last)
    pub elements: Vec<SceneElement>,
}

/// A single drawing primitive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SceneElement {
    /// Opaque rectangle covering the canvas
    Background {
        width: f64,
        height: f64,
        fill: String,
    },

    /// Unfilled guide circle through every point
    CircleGuide {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: String,
        stroke_width: f64,
    },

    /// Line from the center to the circumference
    Ray {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },

    /// Filled dot marking an interval
    Point {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },

    /// Text centered on its anchor
    Label {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        font_family: String,
        fill: String,
    },
}

impl Scene {
    /// Number of primitives of the given kind name (`"point"`, `"ray"`, ...)
    pub fn count(&self, kind: &str) -> usize {
        self.elements.iter().filter(|e| e.kind_name() == kind).count()
    }

    /// True when nothing but the background was drawn
    pub fn is_blank(&self) -> bool {
        self.elements
            .iter()
            .all(|e| matches!(e, SceneElement::Background { .. }))
    }
}

impl SceneElement {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SceneElement::Background { .. } => "background",
            SceneElement::CircleGuide { .. } => "circleGuide",
            SceneElement::Ray { .. } => "ray",
            SceneElement::Point { .. } => "point",
            SceneElement::Label { .. } => "label",
        }
    }
}
