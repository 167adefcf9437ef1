//! Export operations for the WASM API
//!
//! - SVG: the export scene serialized directly
//! - PNG / JPEG: the same SVG rasterized at 2x through an offscreen canvas
//! - Scene JSON: the export scene for inspection/debugging
//!
//! The scene is captured when the export is invoked; later input changes do
//! not affect an export already in flight.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::api::helpers::{js_error, read_config};
use crate::error::DiagramError;
use crate::models::{DiagramConfig, ExportFormat};
use crate::renderers::raster::{document, rasterize, text_blob};
use crate::renderers::{build_export_scene, SVGRenderer};
use crate::utils::export_filename;

/// How long a download's object URL stays alive after the click
const REVOKE_DELAY_MS: i32 = 40_000;

/// Serialize the export scene for `config` to an SVG document
pub fn export_svg_document(config: &DiagramConfig, panel_width: f64, panel_height: f64) -> String {
    let scene = build_export_scene(config, panel_width, panel_height);
    SVGRenderer::render_scene(&scene)
}

/// Click a temporary anchor pointing at `href`
fn trigger_download(href: &str, filename: &str) -> Result<(), DiagramError> {
    let anchor = document()?
        .create_element("a")
        .map_err(|e| DiagramError::Dom(format!("creating anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DiagramError::Dom("anchor element has unexpected type".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

/// Release an object URL once `delay_ms` has passed
fn revoke_later(url: String, delay_ms: i32) -> Result<(), DiagramError> {
    let window =
        web_sys::window().ok_or_else(|| DiagramError::Dom("no window available".to_string()))?;
    let revoke = Closure::once_into_js(move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), delay_ms)
        .map_err(|e| DiagramError::Dom(format!("scheduling URL release: {:?}", e)))?;
    Ok(())
}

fn download_svg(svg: &str, filename: &str) -> Result<(), DiagramError> {
    let blob = text_blob(svg, ExportFormat::Svg.mime_type())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| DiagramError::Dom(format!("creating object URL: {:?}", e)))?;
    if let Err(err) = trigger_download(&url, filename) {
        let _ = web_sys::Url::revoke_object_url(&url);
        return Err(err);
    }
    // The browser may still be reading the blob after the click returns
    revoke_later(url, REVOKE_DELAY_MS)
}

/// Export the diagram as SVG markup
#[wasm_bindgen(js_name = exportSvg)]
pub fn export_svg(config: JsValue, panel_width: f64, panel_height: f64) -> Result<String, JsValue> {
    let config = read_config(config)?;
    let svg = export_svg_document(&config, panel_width, panel_height);
    log::info!("exportSvg: {} bytes", svg.len());
    Ok(svg)
}

/// Export scene as pretty-printed JSON
#[wasm_bindgen(js_name = sceneToJson)]
pub fn scene_to_json(config: JsValue, panel_width: f64, panel_height: f64) -> Result<String, JsValue> {
    let config = read_config(config)?;
    let scene = build_export_scene(&config, panel_width, panel_height);
    serde_json::to_string_pretty(&scene).map_err(|e| {
        log::error!("Scene JSON serialization error: {}", e);
        JsValue::from_str(&format!("Scene JSON serialization error: {}", e))
    })
}

/// Export and download the diagram as `svg`, `png` or `jpeg`.
///
/// Resolves to `true` once a download was triggered. A raster decode failure
/// is logged and resolves to `false` with no file produced.
#[wasm_bindgen(js_name = exportDiagram)]
pub async fn export_diagram(
    config: JsValue,
    format: String,
    panel_width: f64,
    panel_height: f64,
) -> Result<bool, JsValue> {
    let config = read_config(config)?;
    let format: ExportFormat = format.parse().map_err(js_error)?;
    let filename = export_filename(&config.filename, format);

    let scene = build_export_scene(&config, panel_width, panel_height);
    let svg = SVGRenderer::render_scene(&scene);
    log::info!(
        "exportDiagram: {} ({}x{} px)",
        filename,
        scene.width,
        scene.height
    );

    if !format.is_raster() {
        download_svg(&svg, &filename).map_err(js_error)?;
        return Ok(true);
    }

    let data_url = match rasterize(&svg, scene.width, scene.height, format).await {
        Ok(data_url) => data_url,
        Err(err @ DiagramError::RasterDecode(_)) => {
            log::error!("Export of {} abandoned: {}", filename, err);
            return Ok(false);
        }
        Err(err) => return Err(js_error(err)),
    };

    trigger_download(&data_url, &filename).map_err(js_error)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_svg_document_dimensions() {
        let config = DiagramConfig {
            period: "2/1".to_string(),
            intervals: "700".to_string(),
            ..DiagramConfig::default()
        };
        let svg = export_svg_document(&config, 400.0, 400.0);
        assert!(svg.contains("width=\"410\" height=\"410\" viewBox=\"0 0 410 410\""));
    }
}
