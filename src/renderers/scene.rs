//! Scene construction for both consumption modes
//!
//! [`build_scene`] is mode-agnostic. The live and export entry points differ
//! only in which frame they ask the layout engine for.

use crate::models::config::{
    BACKGROUND_COLOR, CIRCLE_STROKE_WIDTH, INK_COLOR, LABEL_FONT_FAMILY, POINT_RADIUS,
    RAY_STROKE_WIDTH,
};
use crate::models::*;
use super::display_list::{Scene, SceneElement};
use super::layout_engine::{build_items, export_frame, live_frame, point_on_circle};

fn background(frame: &Frame) -> SceneElement {
    SceneElement::Background {
        width: frame.canvas_size.width,
        height: frame.canvas_size.height,
        fill: BACKGROUND_COLOR.to_string(),
    }
}

/// Scene holding only the background rectangle
pub fn blank_scene(frame: &Frame) -> Scene {
    Scene {
        width: frame.canvas_size.width,
        height: frame.canvas_size.height,
        elements: vec![background(frame)],
    }
}

/// Turn a frame and its placed items into paint-ordered primitives
pub fn build_scene(frame: &Frame, items: &[PlacedItem], config: &DiagramConfig) -> Scene {
    let mut elements = Vec::with_capacity(2 + items.len() * 3);
    elements.push(background(frame));

    if config.show_circle {
        elements.push(SceneElement::CircleGuide {
            cx: frame.center.x,
            cy: frame.center.y,
            r: frame.radius,
            stroke: INK_COLOR.to_string(),
            stroke_width: CIRCLE_STROKE_WIDTH,
        });
    }

    if config.show_rays {
        for item in items {
            // Recomputed from the angle so rays always end on this frame's circle
            let end = point_on_circle(frame.center, frame.radius, item.angle_deg);
            elements.push(SceneElement::Ray {
                x1: frame.center.x,
                y1: frame.center.y,
                x2: end.x,
                y2: end.y,
                stroke: INK_COLOR.to_string(),
                stroke_width: RAY_STROKE_WIDTH,
            });
        }
    }

    for item in items {
        let position = item.position();
        elements.push(SceneElement::Point {
            cx: position.x,
            cy: position.y,
            r: POINT_RADIUS,
            fill: INK_COLOR.to_string(),
        });
    }

    if config.show_labels {
        let label_radius = frame.radius + config.label_offset;
        for item in items {
            let anchor = point_on_circle(frame.center, label_radius, item.angle_deg);
            elements.push(SceneElement::Label {
                x: anchor.x,
                y: anchor.y,
                text: item.display_label.clone(),
                font_size: config.font_size,
                font_family: LABEL_FONT_FAMILY.to_string(),
                fill: INK_COLOR.to_string(),
            });
        }
    }

    Scene {
        width: frame.canvas_size.width,
        height: frame.canvas_size.height,
        elements,
    }
}

/// Lay out and draw on `frame`, or fall back to a blank canvas when the
/// period cannot anchor a diagram
fn scene_for_frame(frame: &Frame, config: &DiagramConfig) -> Scene {
    let period = match Period::from_text(&config.period) {
        Ok(period) => period,
        Err(e) => {
            log::debug!("Drawing blank canvas: {}", e);
            return blank_scene(frame);
        }
    };

    let items = build_items(&config.period, &config.intervals, frame, period.cents);
    build_scene(frame, &items, config)
}

/// Scene for the on-page view, sized to the host panel's available square
pub fn build_live_scene(config: &DiagramConfig, panel_width: f64, panel_height: f64) -> Scene {
    let config = config.sanitized();
    let frame = live_frame(panel_width, panel_height, config.size_multiplier);
    scene_for_frame(&frame, &config)
}

/// Self-contained scene for export, sized to fit circle, labels and margin
pub fn build_export_scene(config: &DiagramConfig, panel_width: f64, panel_height: f64) -> Scene {
    let config = config.sanitized();
    let frame = export_frame(
        panel_width,
        panel_height,
        config.size_multiplier,
        config.label_overflow(),
    );
    scene_for_frame(&frame, &config)
}
