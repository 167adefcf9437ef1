//! Browser tests for the WASM API
//!
//! Run with `wasm-pack test --headless --chrome`; these need a real DOM.

#![cfg(target_arch = "wasm32")]

use pitch_circle_wasm::api::{export_diagram, parse_period, parse_token, render_live};
use pitch_circle_wasm::models::{DiagramConfig, ExportFormat};
use pitch_circle_wasm::renderers::raster::rasterize;
use pitch_circle_wasm::renderers::{build_export_scene, SVGRenderer};
use pitch_circle_wasm::DiagramError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(panel_size: u32) -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(&format!(
        r#"<div id="panel" style="width:{0}px;height:{0}px"><svg id="circle"></svg></div>"#,
        panel_size
    ));
    document
}

fn config_value(config: &DiagramConfig) -> JsValue {
    serde_wasm_bindgen::to_value(config).unwrap()
}

#[wasm_bindgen_test]
fn test_parse_token_from_js() {
    let token = parse_token("3/2").unwrap();
    assert!(token.is_object());
    assert!(parse_token("# comment").unwrap().is_undefined());
    assert!(parse_period("").is_nan());
}

#[wasm_bindgen_test]
fn test_render_live_builds_svg_children() {
    let document = mount(400);
    let config = DiagramConfig {
        period: "2/1".to_string(),
        intervals: "0\n700\n1200".to_string(),
        ..DiagramConfig::default()
    };

    render_live("circle", "panel", config_value(&config)).unwrap();

    let svg = document.get_element_by_id("circle").unwrap();
    assert_eq!(svg.get_attribute("width").as_deref(), Some("400"));
    assert_eq!(svg.query_selector_all("text").unwrap().length(), 4);
    assert_eq!(svg.query_selector_all("line").unwrap().length(), 4);

    // Redraw replaces rather than appends
    render_live("circle", "panel", config_value(&config)).unwrap();
    assert_eq!(svg.query_selector_all("text").unwrap().length(), 4);
}

#[wasm_bindgen_test]
fn test_render_live_blank_without_period() {
    let document = mount(300);
    render_live("circle", "panel", config_value(&DiagramConfig::default())).unwrap();

    let svg = document.get_element_by_id("circle").unwrap();
    assert_eq!(svg.child_element_count(), 1);
    assert_eq!(svg.first_element_child().unwrap().tag_name(), "rect");
}

#[wasm_bindgen_test]
fn test_render_live_missing_panel_errors() {
    mount(300);
    assert!(render_live("circle", "no-such-panel", JsValue::UNDEFINED).is_err());
}

async fn load_image(src: &str) -> HtmlImageElement {
    let image = HtmlImageElement::new().unwrap();
    image.set_src(src);
    JsFuture::from(image.decode()).await.unwrap();
    image
}

/// RGBA of one pixel of a decoded image
fn pixel_at(image: &HtmlImageElement, x: f64, y: f64) -> Vec<u8> {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(image.natural_width());
    canvas.set_height(image.natural_height());
    let context: CanvasRenderingContext2d =
        canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap();
    context.draw_image_with_html_image_element(image, 0.0, 0.0).unwrap();
    context.get_image_data(x, y, 1.0, 1.0).unwrap().data().0
}

#[wasm_bindgen_test]
async fn test_rasterize_reports_decode_failure() {
    let result = rasterize("<not svg", 100.0, 100.0, ExportFormat::Png).await;
    assert!(matches!(result, Err(DiagramError::RasterDecode(_))), "{:?}", result);
}

#[wasm_bindgen_test]
async fn test_rasterize_png_doubles_scene_size() {
    let config = DiagramConfig {
        period: "2/1".to_string(),
        intervals: "700".to_string(),
        ..DiagramConfig::default()
    };
    let scene = build_export_scene(&config, 400.0, 400.0);
    let svg = SVGRenderer::render_scene(&scene);

    let data_url = rasterize(&svg, scene.width, scene.height, ExportFormat::Png)
        .await
        .unwrap();
    assert!(data_url.starts_with("data:image/png"));

    let image = load_image(&data_url).await;
    assert_eq!(image.natural_width(), 820);
    assert_eq!(image.natural_height(), 820);
}

#[wasm_bindgen_test]
async fn test_rasterize_jpeg_fills_transparent_areas_white() {
    // No background rect, so the only white comes from the JPEG fill
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20"></svg>"#;

    let jpeg = rasterize(svg, 20.0, 20.0, ExportFormat::Jpeg).await.unwrap();
    assert!(jpeg.starts_with("data:image/jpeg"));
    let rgba = pixel_at(&load_image(&jpeg).await, 5.0, 5.0);
    assert!(rgba[..3].iter().all(|&c| c > 245), "{:?}", rgba);

    let png = rasterize(svg, 20.0, 20.0, ExportFormat::Png).await.unwrap();
    let rgba = pixel_at(&load_image(&png).await, 5.0, 5.0);
    assert_eq!(rgba[3], 0);
}

#[wasm_bindgen_test]
async fn test_export_diagram_rejects_unknown_format() {
    let config = DiagramConfig {
        period: "1200".to_string(),
        ..DiagramConfig::default()
    };
    let result = export_diagram(config_value(&config), "gif".to_string(), 400.0, 400.0).await;
    assert!(result.is_err());
}
