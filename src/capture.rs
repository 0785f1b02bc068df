use crate::constants::{CAPTURE_FILENAME, CAPTURE_MIME};
use crate::error::ShareError;
use futures::channel::oneshot;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(target: &web::HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Options forwarded to the rasterizer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    pub allow_taint: bool,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub window_width: f64,
    pub window_height: f64,
}

impl CaptureOptions {
    /// The visible viewport of `window`.
    pub fn for_viewport(window: &web::Window) -> Self {
        let num = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Self {
            allow_taint: true,
            use_cors: true,
            scroll_x: window.scroll_x().unwrap_or(0.0),
            scroll_y: window.scroll_y().unwrap_or(0.0),
            window_width: num(window.inner_width()),
            window_height: num(window.inner_height()),
        }
    }

    fn to_js(&self) -> Result<JsValue, ShareError> {
        let json = serde_json::to_string(self).map_err(|e| ShareError::Capture(e.to_string()))?;
        js_sys::JSON::parse(&json).map_err(|e| ShareError::Capture(format!("{:?}", e)))
    }
}

/// A composited screenshot ready to preview, download or share.
#[derive(Clone)]
pub struct Capture {
    pub canvas: web::HtmlCanvasElement,
    pub file: web::File,
    pub data_url: String,
}

/// Rasterize `document.body` at the current viewport.
pub async fn capture_body() -> Result<web::HtmlCanvasElement, ShareError> {
    let window = web::window().ok_or_else(|| ShareError::Capture("no window".into()))?;
    let body = window
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| ShareError::Capture("no body".into()))?;
    let options = CaptureOptions::for_viewport(&window);
    log::info!(
        "[capture] rasterizing {}x{} viewport",
        options.window_width,
        options.window_height
    );
    let promise = html2canvas(&body, &options.to_js()?)
        .map_err(|e| ShareError::Capture(format!("rasterizer unavailable: {:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ShareError::Capture(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| ShareError::Capture("rasterizer did not return a canvas".into()))
}

/// Encode `canvas` as a PNG file plus a data URL for downloads.
pub async fn finish(canvas: web::HtmlCanvasElement) -> Result<Capture, ShareError> {
    let data_url = canvas
        .to_data_url_with_type(CAPTURE_MIME)
        .map_err(|e| ShareError::Capture(format!("{:?}", e)))?;

    let (tx, rx) = oneshot::channel::<Option<web::Blob>>();
    let on_blob = Closure::once(move |blob: Option<web::Blob>| {
        _ = tx.send(blob);
    });
    canvas
        .to_blob_with_type(on_blob.as_ref().unchecked_ref(), CAPTURE_MIME)
        .map_err(|e| ShareError::Capture(format!("{:?}", e)))?;
    let blob = rx
        .await
        .ok()
        .flatten()
        .ok_or_else(|| ShareError::Capture("canvas produced no image".into()))?;
    drop(on_blob);

    let opts = web::FilePropertyBag::new();
    opts.set_type(CAPTURE_MIME);
    let file = web::File::new_with_blob_sequence_and_options(
        &js_sys::Array::of1(&blob),
        CAPTURE_FILENAME,
        &opts,
    )
    .map_err(|e| ShareError::Capture(format!("{:?}", e)))?;

    Ok(Capture {
        canvas,
        file,
        data_url,
    })
}
