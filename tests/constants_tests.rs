// Host-side tests for constants that markup and styles depend on.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn watermark_default_is_a_sane_percentage() {
    assert!(DEFAULT_WATERMARK_PERCENT > 0.0 && DEFAULT_WATERMARK_PERCENT <= 100.0);
}

#[test]
fn preview_ids_are_unique() {
    let ids = [
        PREVIEW_CONTAINER_ID,
        PREVIEW_IMAGE_ID,
        PREVIEW_CLOSE_ID,
        PREVIEW_BUTTONS_ID,
        PREVIEW_DOWNLOAD_ID,
        PREVIEW_SHARE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.contains(' '));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn capture_file_is_png() {
    assert!(CAPTURE_FILENAME.ends_with(".png"));
    assert_eq!(CAPTURE_MIME, "image/png");
}

#[test]
fn default_selector_is_an_id_query() {
    assert!(DEFAULT_SELECTOR.starts_with('#'));
    assert!(!ASSET_BASE.ends_with('/'));
}
