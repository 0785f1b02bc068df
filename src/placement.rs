use crate::constants::DEFAULT_WATERMARK_PERCENT;
use glam::DVec2;

/// Where a watermark is pinned on the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleCenter,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Unknown or missing names fall back to `TopLeft`.
    pub fn from_name(name: Option<&str>) -> Anchor {
        match name.map(str::trim) {
            Some("topLeft") => Anchor::TopLeft,
            Some("topCenter") => Anchor::TopCenter,
            Some("topRight") => Anchor::TopRight,
            Some("middleLeft") => Anchor::MiddleLeft,
            Some("middleCenter") => Anchor::MiddleCenter,
            Some("middleRight") => Anchor::MiddleRight,
            Some("bottomLeft") => Anchor::BottomLeft,
            Some("bottomCenter") => Anchor::BottomCenter,
            Some("bottomRight") => Anchor::BottomRight,
            _ => Anchor::TopLeft,
        }
    }

    /// Top-left corner of a `size` rectangle anchored inside `canvas`.
    pub fn offset(self, size: DVec2, canvas: DVec2) -> DVec2 {
        let free = canvas - size;
        let center = free * 0.5;
        match self {
            Anchor::TopLeft => DVec2::ZERO,
            Anchor::TopCenter => DVec2::new(center.x, 0.0),
            Anchor::TopRight => DVec2::new(free.x, 0.0),
            Anchor::MiddleLeft => DVec2::new(0.0, center.y),
            Anchor::MiddleCenter => center,
            Anchor::MiddleRight => DVec2::new(free.x, center.y),
            Anchor::BottomLeft => DVec2::new(0.0, free.y),
            Anchor::BottomCenter => DVec2::new(center.x, free.y),
            Anchor::BottomRight => free,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Sizing and anchoring request for one watermark layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    /// Natural image size; `None` when the image never decoded.
    pub image_size: Option<DVec2>,
    pub anchor: Anchor,
    pub max_width_fraction: f64,
    pub max_height_fraction: f64,
}

/// Largest size with the image's aspect ratio that fits `max_w × max_h`.
#[inline]
pub fn scale_to_fit(width: f64, height: f64, max_width: f64, max_height: f64) -> DVec2 {
    let scale = (max_width / width).min(max_height / height);
    DVec2::new(width * scale, height * scale)
}

/// Fraction of the canvas a layer may take; anything unusable becomes the default.
#[inline]
pub fn fraction_from_percent(percent: Option<f64>) -> f64 {
    match percent {
        Some(p) if p.is_finite() && p > 0.0 => p / 100.0,
        _ => DEFAULT_WATERMARK_PERCENT / 100.0,
    }
}

pub fn place(
    image_size: DVec2,
    anchor: Anchor,
    max_width_fraction: f64,
    max_height_fraction: f64,
    canvas: DVec2,
) -> Option<Placement> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(image_size.x) || !usable(image_size.y) {
        return None;
    }
    let max = canvas * DVec2::new(max_width_fraction, max_height_fraction);
    let size = scale_to_fit(image_size.x, image_size.y, max.x, max.y);
    let origin = anchor.offset(size, canvas);
    Some(Placement {
        x: origin.x,
        y: origin.y,
        width: size.x,
        height: size.y,
    })
}

/// Placements in draw order, paired with the index of the layer they belong to.
/// Layers whose image is missing are left out.
pub fn layout(layers: &[LayerSpec], canvas: DVec2) -> Vec<(usize, Placement)> {
    layers
        .iter()
        .enumerate()
        .filter_map(|(i, layer)| {
            let size = layer.image_size?;
            place(
                size,
                layer.anchor,
                layer.max_width_fraction,
                layer.max_height_fraction,
                canvas,
            )
            .map(|p| (i, p))
        })
        .collect()
}

/// Parse a CSS pixel length such as `"1280px"`.
pub fn css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
