// Host-side tests for watermark scaling and anchoring.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod placement {
    include!("../src/placement.rs");
}

use glam::DVec2;
use placement::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn scale_to_fit_preserves_aspect_ratio() {
    let cases = [
        (400.0, 100.0, 200.0, 200.0),
        (100.0, 400.0, 200.0, 200.0),
        (37.0, 91.0, 1280.0, 40.0),
        (10.0, 10.0, 500.0, 300.0),
        (1920.0, 1080.0, 256.0, 144.0),
    ];
    for (w, h, max_w, max_h) in cases {
        let size = scale_to_fit(w, h, max_w, max_h);
        assert!(approx(size.x / size.y, w / h), "{:?} for {}x{}", size, w, h);
        assert!(size.x <= max_w + EPS && size.y <= max_h + EPS);
        // One side always touches its limit
        assert!(approx(size.x, max_w) || approx(size.y, max_h));
    }
}

#[test]
fn scale_to_fit_upscales_small_images() {
    let size = scale_to_fit(10.0, 5.0, 100.0, 100.0);
    assert!(approx(size.x, 100.0));
    assert!(approx(size.y, 50.0));
}

#[test]
fn every_anchor_stays_inside_canvas() {
    let canvas = DVec2::new(1280.0, 720.0);
    let images = [
        DVec2::new(300.0, 100.0),
        DVec2::new(50.0, 400.0),
        DVec2::new(5000.0, 5000.0),
    ];
    let fractions = [(0.2, 0.2), (1.0, 1.0), (0.5, 0.1), (0.01, 0.9)];
    for anchor in Anchor::ALL {
        for image in images {
            for (fw, fh) in fractions {
                let p = place(image, anchor, fw, fh, canvas).expect("placement");
                assert!(p.x >= -EPS && p.y >= -EPS, "{:?} {:?}", anchor, p);
                assert!(p.x + p.width <= canvas.x + EPS, "{:?} {:?}", anchor, p);
                assert!(p.y + p.height <= canvas.y + EPS, "{:?} {:?}", anchor, p);
            }
        }
    }
}

#[test]
fn anchor_offsets_match_corners_and_centers() {
    let canvas = DVec2::new(1000.0, 500.0);
    let size = DVec2::new(100.0, 50.0);
    let expect = [
        (Anchor::TopLeft, (0.0, 0.0)),
        (Anchor::TopCenter, (450.0, 0.0)),
        (Anchor::TopRight, (900.0, 0.0)),
        (Anchor::MiddleLeft, (0.0, 225.0)),
        (Anchor::MiddleCenter, (450.0, 225.0)),
        (Anchor::MiddleRight, (900.0, 225.0)),
        (Anchor::BottomLeft, (0.0, 450.0)),
        (Anchor::BottomCenter, (450.0, 450.0)),
        (Anchor::BottomRight, (900.0, 450.0)),
    ];
    for (anchor, (x, y)) in expect {
        let o = anchor.offset(size, canvas);
        assert!(approx(o.x, x) && approx(o.y, y), "{:?} -> {:?}", anchor, o);
    }
}

#[test]
fn unknown_or_missing_anchor_names_are_top_left() {
    assert_eq!(Anchor::from_name(None), Anchor::TopLeft);
    assert_eq!(Anchor::from_name(Some("")), Anchor::TopLeft);
    assert_eq!(Anchor::from_name(Some("bottom-right")), Anchor::TopLeft);
    assert_eq!(Anchor::from_name(Some("BottomRight")), Anchor::TopLeft);
    assert_eq!(Anchor::from_name(Some(" bottomRight ")), Anchor::BottomRight);
    assert_eq!(Anchor::from_name(Some("middleCenter")), Anchor::MiddleCenter);
}

#[test]
fn missing_image_produces_no_placement() {
    let canvas = DVec2::new(800.0, 600.0);
    assert!(place(DVec2::ZERO, Anchor::TopLeft, 0.2, 0.2, canvas).is_none());
    assert!(place(DVec2::new(10.0, 0.0), Anchor::TopLeft, 0.2, 0.2, canvas).is_none());
    assert!(place(DVec2::new(f64::NAN, 10.0), Anchor::TopLeft, 0.2, 0.2, canvas).is_none());
}

#[test]
fn layout_keeps_input_order_and_skips_unloaded() {
    let canvas = DVec2::new(1000.0, 1000.0);
    let layers = [
        LayerSpec {
            image_size: Some(DVec2::new(100.0, 100.0)),
            anchor: Anchor::from_name(Some("topLeft")),
            max_width_fraction: 0.2,
            max_height_fraction: 0.2,
        },
        LayerSpec {
            image_size: None,
            anchor: Anchor::MiddleCenter,
            max_width_fraction: 0.2,
            max_height_fraction: 0.2,
        },
        LayerSpec {
            image_size: Some(DVec2::new(200.0, 100.0)),
            anchor: Anchor::from_name(Some("bottomRight")),
            max_width_fraction: 0.2,
            max_height_fraction: 0.2,
        },
    ];
    let placed = layout(&layers, canvas);
    let order: Vec<usize> = placed.iter().map(|(i, _)| *i).collect();
    assert_eq!(order, vec![0, 2]);

    let (_, a) = placed[0];
    assert!(approx(a.x, 0.0) && approx(a.y, 0.0));
    assert!(approx(a.width, 200.0) && approx(a.height, 200.0));

    let (_, b) = placed[1];
    assert!(approx(b.width, 200.0) && approx(b.height, 100.0));
    assert!(approx(b.x + b.width, 1000.0));
    assert!(approx(b.y + b.height, 1000.0));
}

#[test]
fn overlapping_layers_draw_later_over_earlier() {
    let canvas = DVec2::new(100.0, 100.0);
    let full = |anchor| LayerSpec {
        image_size: Some(DVec2::new(10.0, 10.0)),
        anchor,
        max_width_fraction: 1.0,
        max_height_fraction: 1.0,
    };
    let placed = layout(&[full(Anchor::TopLeft), full(Anchor::BottomRight)], canvas);
    // Both fill the canvas; the second is drawn last and ends up on top.
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].0, 0);
    assert_eq!(placed[1].0, 1);
    assert_eq!(placed[0].1, placed[1].1);
}

#[test]
fn percent_defaults_to_twenty() {
    assert!(approx(fraction_from_percent(None), 0.2));
    assert!(approx(fraction_from_percent(Some(0.0)), 0.2));
    assert!(approx(fraction_from_percent(Some(-5.0)), 0.2));
    assert!(approx(fraction_from_percent(Some(f64::INFINITY)), 0.2));
    assert!(approx(fraction_from_percent(Some(35.0)), 0.35));
}

#[test]
fn css_px_reads_style_lengths() {
    assert_eq!(css_px("1280px"), Some(1280.0));
    assert_eq!(css_px(" 720.5px "), Some(720.5));
    assert_eq!(css_px("640"), Some(640.0));
    assert_eq!(css_px(""), None);
    assert_eq!(css_px("auto"), None);
    assert_eq!(css_px("0px"), None);
}
