//! SVG rendering output
//!
//! Serializes a [`Scene`] into a standalone SVG document. The live view uses
//! the same element table through the DOM adapter in `api::live`.

pub mod elements;
pub mod document;

pub use elements::*;
pub use document::*;
use crate::renderers::display_list::Scene;

/// SVG document generator
pub struct SVGRenderer;

impl SVGRenderer {
    pub fn render_scene(scene: &Scene) -> String {
        let svg = SVGDocumentGenerator::generate(scene);
        log::debug!(
            "Serialized {} scene elements to {} bytes of SVG",
            scene.elements.len(),
            svg.len()
        );
        svg
    }
}
