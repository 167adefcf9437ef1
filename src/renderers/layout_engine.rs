//! Layout Engine - frame computation and placement of intervals on the circle
//!
//! This is the single geometric contract shared by the live view and the
//! export path: both obtain their radius from [`compute_frame`] and their
//! points from [`build_items`], so an exported image matches the preview.

use crate::models::config::{EDGE_PADDING, EXPORT_MARGIN, MIN_DIMENSION, MIN_EXPORT_SIZE, MIN_RADIUS};
use crate::models::*;
use crate::parse::interval::{parse_intervals, parse_token, period_label};

/// Compute the canonical frame for an available drawing area.
///
/// Both dimensions are floored at [`MIN_DIMENSION`] so a host panel that has
/// not been laid out yet still yields a usable circle. The multiplier scales
/// the radius without an upper clamp.
pub fn compute_frame(available_width: f64, available_height: f64, size_multiplier: f64) -> Frame {
    let width = available_width.max(MIN_DIMENSION);
    let height = available_height.max(MIN_DIMENSION);

    let max_radius = width.min(height) / 2.0 - EDGE_PADDING;
    let base_radius = MIN_RADIUS.max(max_radius);

    Frame {
        canvas_size: Size { width, height },
        center: Point {
            x: width / 2.0,
            y: height / 2.0,
        },
        radius: base_radius * size_multiplier,
    }
}

/// Frame for the live view: the largest square that fits the host panel
pub fn live_frame(panel_width: f64, panel_height: f64, size_multiplier: f64) -> Frame {
    let side = panel_width.min(panel_height);
    compute_frame(side, side, size_multiplier)
}

/// Frame for export: same radius as [`compute_frame`], on a square canvas
/// just large enough for the circle, the label overflow and a fixed margin.
pub fn export_frame(
    panel_width: f64,
    panel_height: f64,
    size_multiplier: f64,
    label_overflow: f64,
) -> Frame {
    let radius = compute_frame(panel_width, panel_height, size_multiplier).radius;
    let side = ((radius + label_overflow + EXPORT_MARGIN) * 2.0)
        .ceil()
        .max(MIN_EXPORT_SIZE);

    Frame {
        canvas_size: Size {
            width: side,
            height: side,
        },
        center: Point {
            x: side / 2.0,
            y: side / 2.0,
        },
        radius,
    }
}

/// Angle of `cents` within the period, clockwise from the top, in `[0, 360)`.
///
/// A quotient that overflows has no meaningful position and lands at 0.
pub fn compute_angle(cents: f64, period_cents: f64) -> f64 {
    let degrees = cents / period_cents * 360.0;
    if !degrees.is_finite() {
        return 0.0;
    }

    let angle = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Point at `angle_deg` on a circle, with 0° at 12 o'clock
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = (angle_deg - 90.0).to_radians();
    Point {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

fn place(frame: &Frame, token: IntervalToken, period_cents: f64, is_period: bool) -> PlacedItem {
    let angle_deg = if is_period {
        0.0
    } else {
        compute_angle(token.cents, period_cents)
    };
    let Point { x, y } = point_on_circle(frame.center, frame.radius, angle_deg);

    PlacedItem {
        cents: token.cents,
        display_label: token.display_label,
        kind: token.kind,
        is_period,
        angle_deg,
        x,
        y,
    }
}

/// Place the period and every parseable interval line on the frame.
///
/// The period always comes first at angle 0; intervals follow in input
/// order, duplicates included. `period_cents` must be finite and non-zero;
/// callers skip layout entirely otherwise.
pub fn build_items(
    period_text: &str,
    intervals_text: &str,
    frame: &Frame,
    period_cents: f64,
) -> Vec<PlacedItem> {
    let period_token = IntervalToken {
        cents: period_cents,
        display_label: period_label(period_text, period_cents),
        kind: parse_token(period_text).map_or(IntervalKind::Cents, |t| t.kind),
    };

    let intervals = parse_intervals(intervals_text);
    let mut items = Vec::with_capacity(intervals.len() + 1);
    items.push(place(frame, period_token, period_cents, true));
    items.extend(
        intervals
            .into_iter()
            .map(|token| place(frame, token, period_cents, false)),
    );

    log::debug!(
        "Placed {} items (period {} cents, radius {:.1})",
        items.len(),
        period_cents,
        frame.radius
    );

    items
}
