// Host-side tests for component configuration and asset resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod placement {
    include!("../src/placement.rs");
}
mod mime {
    include!("../src/mime.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use placement::Anchor;

#[test]
fn empty_object_uses_defaults() {
    let cfg = ShareConfig::from_json("{}").expect("parse");
    assert_eq!(cfg.selector, "#Share_CTA");
    assert!(!cfg.screenshot_mode);
    assert!(cfg.watermarks.is_empty());
    assert!(cfg.files.is_empty());
    assert_eq!(cfg, ShareConfig::default());
}

#[test]
fn parses_aframe_data_object() {
    let json = r##"{
        "selector": "#shareBtn",
        "title": "My Scene",
        "text": "Look at this",
        "url": "https://example.com",
        "screenshotMode": true,
        "watermarks": ["logo.png", "badge.png"],
        "watermarkPositions": ["topLeft", "bottomRight"],
        "watermarkMaxWidths": ["30", 15],
        "watermarkMaxHeights": [],
        "files": [],
        "folder": "campaign"
    }"##;
    let cfg = ShareConfig::from_json(json).expect("parse");
    assert_eq!(cfg.selector, "#shareBtn");
    assert!(cfg.screenshot_mode);
    assert_eq!(cfg.watermarks, vec!["logo.png", "badge.png"]);
    assert_eq!(cfg.watermark_max_widths, vec![Some(30.0), Some(15.0)]);
    assert!(cfg.watermark_max_heights.is_empty());
    assert_eq!(cfg.folder, "campaign");
}

#[test]
fn lenient_values_from_markup() {
    let json = r#"{
        "screenshotMode": "true",
        "watermarks": "a.png, b.png",
        "watermarkMaxWidths": "25, , x",
        "selector": ""
    }"#;
    let cfg = ShareConfig::from_json(json).expect("parse");
    assert!(cfg.screenshot_mode);
    assert_eq!(cfg.watermarks, vec!["a.png", "b.png"]);
    assert_eq!(cfg.watermark_max_widths, vec![Some(25.0), None, None]);
    assert_eq!(cfg.selector, "#Share_CTA");

    let cfg = ShareConfig::from_json(r#"{"screenshotMode": "false"}"#).expect("parse");
    assert!(!cfg.screenshot_mode);
}

#[test]
fn watermark_requests_align_parallel_lists() {
    let json = r#"{
        "watermarks": ["a.png", "b.png", "c.png"],
        "watermarkPositions": ["middleCenter", "bottomRight"],
        "watermarkMaxWidths": [50],
        "watermarkMaxHeights": [null, 10]
    }"#;
    let cfg = ShareConfig::from_json(json).expect("parse");
    let reqs = cfg.watermark_requests();
    assert_eq!(reqs.len(), 3);

    assert_eq!(reqs[0].src, "../assets/sharing/a.png");
    assert_eq!(reqs[0].anchor, Anchor::MiddleCenter);
    assert!((reqs[0].max_width_fraction - 0.5).abs() < 1e-9);
    assert!((reqs[0].max_height_fraction - 0.2).abs() < 1e-9);

    assert_eq!(reqs[1].anchor, Anchor::BottomRight);
    assert!((reqs[1].max_width_fraction - 0.2).abs() < 1e-9);
    assert!((reqs[1].max_height_fraction - 0.1).abs() < 1e-9);

    // No position given: default anchor and size
    assert_eq!(reqs[2].anchor, Anchor::TopLeft);
    assert!((reqs[2].max_width_fraction - 0.2).abs() < 1e-9);
}

#[test]
fn blank_watermark_keeps_later_indices() {
    let json = r#"{
        "watermarks": ["", "b.png"],
        "watermarkPositions": ["topRight", "bottomLeft"]
    }"#;
    let cfg = ShareConfig::from_json(json).expect("parse");
    let reqs = cfg.watermark_requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].anchor, Anchor::BottomLeft);
}

#[test]
fn asset_paths_join_folder() {
    let mut cfg = ShareConfig::default();
    assert_eq!(cfg.asset_path("x.png"), "../assets/sharing/x.png");
    cfg.folder = "promo".into();
    assert_eq!(cfg.asset_path("x.png"), "../assets/sharing/promo/x.png");
    cfg.folder = "/promo/".into();
    assert_eq!(cfg.asset_path("/x.png"), "../assets/sharing/promo/x.png");
}

#[test]
fn clipboard_text_joins_title_text_url() {
    let cfg = ShareConfig {
        title: "T".into(),
        text: "body".into(),
        url: "https://u".into(),
        ..ShareConfig::default()
    };
    assert_eq!(cfg.clipboard_text(), "T body https://u");
}

#[test]
fn share_files_skip_blanks() {
    let cfg = ShareConfig::from_json(r#"{"files": ["x.png", "", "y.mp4"]}"#).expect("parse");
    let files: Vec<&str> = cfg.share_files().collect();
    assert_eq!(files, vec!["x.png", "y.mp4"]);
}

#[test]
fn mime_from_extension() {
    assert_eq!(mime::mime_for("x.png"), "image/png");
    assert_eq!(mime::mime_for("photo.JPG"), "image/jpeg");
    assert_eq!(mime::mime_for("clip.mp4"), "video/mp4");
    assert_eq!(mime::mime_for("model.glb"), "model/gltf-binary");
    assert_eq!(mime::mime_for("archive.tar.gz"), "application/octet-stream");
    assert_eq!(mime::mime_for("README"), "application/octet-stream");
    assert_eq!(mime::mime_for(".png"), "application/octet-stream");
}
