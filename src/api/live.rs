//! Live view rendering
//!
//! The host page calls `renderLive` on every input change and viewport
//! resize. Each call measures the host panel, builds a fresh scene and
//! replaces the children of the target `<svg>` element with it.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::api::helpers::{js_error, read_config};
use crate::error::DiagramError;
use crate::renderers::display_list::Scene;
use crate::renderers::raster::document;
use crate::renderers::svg::{root_attributes, svg_node, SVG_NAMESPACE};
use crate::renderers::build_live_scene;

fn element_by_id(document: &Document, id: &str) -> Result<Element, DiagramError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DiagramError::Dom(format!("element '#{}' not found", id)))
}

fn dom_error(e: JsValue) -> DiagramError {
    DiagramError::Dom(format!("{:?}", e))
}

/// Replace the contents of `svg` with the scene's elements
pub fn apply_scene(document: &Document, svg: &Element, scene: &Scene) -> Result<(), DiagramError> {
    for (name, value) in root_attributes(scene) {
        svg.set_attribute(name, &value).map_err(dom_error)?;
    }

    while let Some(child) = svg.first_child() {
        svg.remove_child(&child).map_err(dom_error)?;
    }

    for element in &scene.elements {
        let node = svg_node(element);
        let dom_node = document
            .create_element_ns(Some(SVG_NAMESPACE), node.tag)
            .map_err(dom_error)?;
        for (name, value) in &node.attributes {
            dom_node.set_attribute(name, value).map_err(dom_error)?;
        }
        if let Some(text) = &node.text {
            dom_node.set_text_content(Some(text));
        }
        svg.append_child(&dom_node).map_err(dom_error)?;
    }

    Ok(())
}

/// Redraw the live diagram into `svg_id`, sized to the panel `panel_id`
#[wasm_bindgen(js_name = renderLive)]
pub fn render_live(svg_id: &str, panel_id: &str, config: JsValue) -> Result<(), JsValue> {
    let config = read_config(config)?;
    let document = document().map_err(js_error)?;

    let panel = element_by_id(&document, panel_id).map_err(js_error)?;
    let svg = element_by_id(&document, svg_id).map_err(js_error)?;

    let scene = build_live_scene(
        &config,
        panel.client_width() as f64,
        panel.client_height() as f64,
    );
    log::debug!(
        "renderLive: panel {}x{}, {} elements",
        panel.client_width(),
        panel.client_height(),
        scene.elements.len()
    );

    apply_scene(&document, &svg, &scene).map_err(js_error)
}
