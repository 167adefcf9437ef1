//! SVG document generation
//!
//! Wraps the scene's element markup in a self-contained document with fixed
//! pixel dimensions, suitable for download or for rasterization.

use super::elements::{svg_node, SVG_NAMESPACE};
use crate::renderers::display_list::Scene;
use crate::utils::fmt_num;

/// Attributes for the `<svg>` root: fixed size plus a matching viewBox
pub fn root_attributes(scene: &Scene) -> Vec<(&'static str, String)> {
    let width = fmt_num(scene.width);
    let height = fmt_num(scene.height);
    vec![
        ("width", width.clone()),
        ("height", height.clone()),
        ("viewBox", format!("0 0 {} {}", width, height)),
    ]
}

pub struct SVGDocumentGenerator;

impl SVGDocumentGenerator {
    /// Serialize a scene to a complete SVG document
    pub fn generate(scene: &Scene) -> String {
        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        svg.push_str(&format!("<svg xmlns=\"{}\"", SVG_NAMESPACE));
        for (name, value) in root_attributes(scene) {
            svg.push_str(&format!(" {}=\"{}\"", name, value));
        }
        svg.push_str(">\n");

        for element in &scene.elements {
            svg.push_str("  ");
            svg.push_str(&svg_node(element).to_markup());
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}
