//! Per-draw configuration and rendering constants
//!
//! The host page collects every control value into a [`DiagramConfig`] and
//! passes it in on each draw; nothing in the crate reads UI state directly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;

/// Width/height floor applied before any frame computation
pub const MIN_DIMENSION: f64 = 200.0;

/// Space kept between the circle and the canvas edge for exterior labels
pub const EDGE_PADDING: f64 = 60.0;

/// Smallest base radius, used when the panel is too small for the padding
pub const MIN_RADIUS: f64 = 20.0;

/// Outer margin added around circle plus labels in exported images
pub const EXPORT_MARGIN: f64 = 30.0;

/// Exported images are never smaller than this on either side
pub const MIN_EXPORT_SIZE: f64 = 200.0;

/// Supersampling factor for PNG/JPEG output
pub const RASTER_SCALE: f64 = 2.0;

/// Base name used when the filename field is empty
pub const DEFAULT_FILENAME: &str = "pitch-circle";

pub const POINT_RADIUS: f64 = 4.0;
pub const CIRCLE_STROKE_WIDTH: f64 = 1.5;
pub const RAY_STROKE_WIDTH: f64 = 1.0;
pub const LABEL_FONT_FAMILY: &str = "sans-serif";
pub const INK_COLOR: &str = "#000000";
pub const BACKGROUND_COLOR: &str = "#ffffff";

pub const DEFAULT_SIZE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_LABEL_OFFSET: f64 = 35.0;

/// Snapshot of every input control for one draw cycle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramConfig {
    /// Raw period field
    pub period: String,

    /// Raw interval list, one token per line
    pub intervals: String,

    pub show_circle: bool,
    pub show_rays: bool,
    pub show_labels: bool,

    /// Circle size multiplier (slider, typically around 1.0)
    pub size_multiplier: f64,

    /// Label font size in pixels
    pub font_size: f64,

    /// Distance from the circle to the label anchors
    pub label_offset: f64,

    /// Export base name (empty means [`DEFAULT_FILENAME`])
    pub filename: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            period: String::new(),
            intervals: String::new(),
            show_circle: true,
            show_rays: true,
            show_labels: true,
            size_multiplier: DEFAULT_SIZE_MULTIPLIER,
            font_size: DEFAULT_FONT_SIZE,
            label_offset: DEFAULT_LABEL_OFFSET,
            filename: String::new(),
        }
    }
}

impl DiagramConfig {
    /// Copy with non-positive or non-finite numeric controls reset to their
    /// defaults. No upper bound is enforced.
    pub fn sanitized(&self) -> Self {
        fn positive_or(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        }

        Self {
            size_multiplier: positive_or(self.size_multiplier, DEFAULT_SIZE_MULTIPLIER),
            font_size: positive_or(self.font_size, DEFAULT_FONT_SIZE),
            label_offset: positive_or(self.label_offset, DEFAULT_LABEL_OFFSET),
            ..self.clone()
        }
    }

    /// How far labels reach beyond the circle (0 when labels are hidden)
    pub fn label_overflow(&self) -> f64 {
        if self.show_labels {
            self.label_offset
        } else {
            0.0
        }
    }
}

/// Export target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }

    /// Raster formats need a canvas pass
    pub fn is_raster(&self) -> bool {
        !matches!(self, ExportFormat::Svg)
    }

    /// JPEG has no alpha channel, so the canvas is filled white first
    pub fn has_alpha(&self) -> bool {
        !matches!(self, ExportFormat::Jpeg)
    }
}

impl FromStr for ExportFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            other => Err(DiagramError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: DiagramConfig =
            serde_json::from_str(r#"{"period": "2/1", "showRays": false}"#).unwrap();
        assert_eq!(config.period, "2/1");
        assert!(!config.show_rays);
        assert!(config.show_circle);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(config.label_offset, DEFAULT_LABEL_OFFSET);
    }

    #[test]
    fn test_sanitized_resets_invalid_numbers() {
        let config = DiagramConfig {
            size_multiplier: 0.0,
            font_size: f64::NAN,
            label_offset: -4.0,
            ..DiagramConfig::default()
        };
        let clean = config.sanitized();
        assert_eq!(clean.size_multiplier, DEFAULT_SIZE_MULTIPLIER);
        assert_eq!(clean.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(clean.label_offset, DEFAULT_LABEL_OFFSET);
    }

    #[test]
    fn test_sanitized_keeps_large_multiplier() {
        let config = DiagramConfig {
            size_multiplier: 7.5,
            ..DiagramConfig::default()
        };
        assert_eq!(config.sanitized().size_multiplier, 7.5);
    }

    #[test]
    fn test_label_overflow_follows_toggle() {
        let mut config = DiagramConfig::default();
        assert_eq!(config.label_overflow(), DEFAULT_LABEL_OFFSET);
        config.show_labels = false;
        assert_eq!(config.label_overflow(), 0.0);
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("SVG".parse::<ExportFormat>(), Ok(ExportFormat::Svg));
        assert_eq!("jpg".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
        assert_eq!("jpeg".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
        assert_eq!(
            "gif".parse::<ExportFormat>(),
            Err(DiagramError::UnsupportedFormat("gif".to_string()))
        );
        assert!(ExportFormat::Png.has_alpha());
        assert!(!ExportFormat::Jpeg.has_alpha());
        assert!(!ExportFormat::Svg.is_raster());
    }
}
