//! Raster export through an offscreen canvas
//!
//! The SVG document is loaded into an image element, decoded, drawn onto a
//! canvas at [`RASTER_SCALE`] and encoded as a data URL. Decoding is the only
//! suspension point: it either resolves (draw, encode) or rejects (the export
//! is abandoned). There is no retry and no timeout.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, HtmlCanvasElement,
    HtmlImageElement, Url,
};

use crate::error::DiagramError;
use crate::models::config::{BACKGROUND_COLOR, RASTER_SCALE};
use crate::models::ExportFormat;

fn dom_error(context: &'static str) -> impl Fn(JsValue) -> DiagramError {
    move |e| DiagramError::Dom(format!("{}: {:?}", context, e))
}

pub(crate) fn document() -> Result<Document, DiagramError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DiagramError::Dom("no document available".to_string()))
}

/// Wrap text in a Blob of the given MIME type
pub(crate) fn text_blob(text: &str, mime_type: &str) -> Result<Blob, DiagramError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let mut options = BlobPropertyBag::new();
    options.type_(mime_type);
    Blob::new_with_str_sequence_and_options(&parts, &options).map_err(dom_error("creating blob"))
}

/// Pixel dimensions of the raster output for a scene of `width` x `height`
pub fn raster_size(width: f64, height: f64) -> (u32, u32) {
    (
        (width * RASTER_SCALE).round().max(1.0) as u32,
        (height * RASTER_SCALE).round().max(1.0) as u32,
    )
}

/// Load an SVG document into an image element and wait for it to decode
async fn decode_svg(svg: &str) -> Result<HtmlImageElement, DiagramError> {
    let blob = text_blob(svg, "image/svg+xml;charset=utf-8")?;
    let url = Url::create_object_url_with_blob(&blob).map_err(dom_error("creating object URL"))?;

    let image = HtmlImageElement::new().map_err(dom_error("creating image"))?;
    image.set_src(&url);

    let decoded = JsFuture::from(image.decode()).await;
    // Safe to release once decode settled either way
    let _ = Url::revoke_object_url(&url);

    decoded
        .map(|_| image)
        .map_err(|e| DiagramError::RasterDecode(format!("{:?}", e)))
}

/// Rasterize an SVG document of `width` x `height` pixels into a data URL of
/// the requested format, at twice the pixel density.
pub async fn rasterize(
    svg: &str,
    width: f64,
    height: f64,
    format: ExportFormat,
) -> Result<String, DiagramError> {
    let image = decode_svg(svg).await?;
    let (pixel_width, pixel_height) = raster_size(width, height);

    let canvas = document()?
        .create_element("canvas")
        .map_err(dom_error("creating canvas"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DiagramError::Dom("canvas element has unexpected type".to_string()))?;
    canvas.set_width(pixel_width);
    canvas.set_height(pixel_height);

    let context = canvas
        .get_context("2d")
        .map_err(dom_error("requesting 2d context"))?
        .ok_or_else(|| DiagramError::Dom("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DiagramError::Dom("2d context has unexpected type".to_string()))?;

    if !format.has_alpha() {
        context.set_fill_style(&JsValue::from_str(BACKGROUND_COLOR));
        context.fill_rect(0.0, 0.0, pixel_width as f64, pixel_height as f64);
    }

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            pixel_width as f64,
            pixel_height as f64,
        )
        .map_err(dom_error("drawing image"))?;

    canvas
        .to_data_url_with_type(format.mime_type())
        .map_err(dom_error("encoding canvas"))
}
