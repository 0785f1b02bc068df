/// Asset, markup and messaging constants for the share components.
///
/// Keeping ids and strings here lets host-side tests check them without a DOM.
// Asset resolution
pub const ASSET_BASE: &str = "../assets/sharing";

// Component defaults
pub const COMPONENT_NAME: &str = "screenshot-share";
pub const DEFAULT_SELECTOR: &str = "#Share_CTA";

// Watermark sizing (percent of the capture dimension)
pub const DEFAULT_WATERMARK_PERCENT: f64 = 20.0;

// Joint text+file sharing needs at least this mobile OS major version
pub const JOINT_SHARE_MIN_MAJOR: u32 = 16;

// Capture output
pub const CAPTURE_FILENAME: &str = "share-image.png";
pub const CAPTURE_MIME: &str = "image/png";
pub const FALLBACK_MIME: &str = "application/octet-stream";

// Preview markup ids
pub const PREVIEW_CONTAINER_ID: &str = "sharingPreviewContainer";
pub const PREVIEW_IMAGE_ID: &str = "sharingPreview";
pub const PREVIEW_CLOSE_ID: &str = "sharingCloseBtn";
pub const PREVIEW_BUTTONS_ID: &str = "sharingPreviewBtns";
pub const PREVIEW_DOWNLOAD_ID: &str = "sharingDownloadBtn";
pub const PREVIEW_SHARE_ID: &str = "sharingShareBtn";
pub const TAPPABLE_CLASS: &str = "cantap";

// User notices
pub const NOTICE_FALLBACK: &str = "Text copied to clipboard and files downloaded";
pub const NOTICE_TEXT_COPIED: &str = "iOS 15 or below detected, text copied to clipboard";

// Analytics events pushed to `window.dataLayer`
pub const EVENT_DOWNLOAD_CLICKED: &str = "Event: Download Clicked";
pub const EVENT_SHARE_CLICKED: &str = "Event: Share Clicked";

// Hidden share frame document
pub const SHARE_FRAME_HTML: &str = "<!DOCTYPE html><html>";
