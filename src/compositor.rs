use crate::config::WatermarkRequest;
use crate::placement::{css_px, layout, Anchor, LayerSpec};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

struct WatermarkLayer {
    src: String,
    image: web::HtmlImageElement,
    anchor: Anchor,
    max_width_fraction: f64,
    max_height_fraction: f64,
}

/// Watermark images in draw order, decoded ahead of the first capture.
pub struct Watermarks {
    layers: Vec<WatermarkLayer>,
}

impl Watermarks {
    /// Start loading every image; a layer that fails to create is skipped.
    pub fn load(requests: &[WatermarkRequest]) -> Self {
        let layers = requests
            .iter()
            .filter_map(|req| {
                let image = match web::HtmlImageElement::new() {
                    Ok(img) => img,
                    Err(e) => {
                        log::warn!("[watermark] cannot create image for {}: {:?}", req.src, e);
                        return None;
                    }
                };
                image.set_cross_origin(Some("anonymous"));
                image.set_src(&req.src);
                Some(WatermarkLayer {
                    src: req.src.clone(),
                    image,
                    anchor: req.anchor,
                    max_width_fraction: req.max_width_fraction,
                    max_height_fraction: req.max_height_fraction,
                })
            })
            .collect();
        Self { layers }
    }

    /// Draw every decoded watermark onto `canvas`, first layer first.
    pub fn composite(&self, canvas: &web::HtmlCanvasElement) -> anyhow::Result<usize> {
        if self.layers.is_empty() {
            return Ok(0);
        }
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let size = css_size(canvas);
        let specs: Vec<LayerSpec> = self
            .layers
            .iter()
            .map(|layer| LayerSpec {
                image_size: decoded_size(&layer.image),
                anchor: layer.anchor,
                max_width_fraction: layer.max_width_fraction,
                max_height_fraction: layer.max_height_fraction,
            })
            .collect();

        let placements = layout(&specs, size);
        for (i, layer) in self.layers.iter().enumerate() {
            if !placements.iter().any(|(idx, _)| *idx == i) {
                log::warn!("[watermark] {} not loaded; omitted", layer.src);
            }
        }
        for (i, p) in &placements {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.layers[*i].image,
                p.x,
                p.y,
                p.width,
                p.height,
            )
            .map_err(|e| anyhow::anyhow!("drawImage failed: {:?}", e))?;
        }
        log::info!(
            "[watermark] drew {} of {} on {:.0}x{:.0}",
            placements.len(),
            self.layers.len(),
            size.x,
            size.y
        );
        Ok(placements.len())
    }
}

fn decoded_size(image: &web::HtmlImageElement) -> Option<DVec2> {
    if !image.complete() || image.natural_width() == 0 || image.natural_height() == 0 {
        return None;
    }
    Some(DVec2::new(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    ))
}

/// Layout size of the capture. The rasterizer scales its context by the
/// device pixel ratio, so drawing happens in CSS pixels.
fn css_size(canvas: &web::HtmlCanvasElement) -> DVec2 {
    let style = canvas.style();
    let read = |prop: &str| style.get_property_value(prop).ok().and_then(|v| css_px(&v));
    DVec2::new(
        read("width").unwrap_or_else(|| f64::from(canvas.width())),
        read("height").unwrap_or_else(|| f64::from(canvas.height())),
    )
}
