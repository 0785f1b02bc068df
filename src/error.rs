use thiserror::Error;

/// Failures of the share, clipboard, fetch and capture steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("share cancelled by user")]
    Cancelled,

    #[error("share not allowed: {0}")]
    NotAllowed(String),

    #[error("native share unavailable: {0}")]
    Unsupported(String),

    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("script error: {0}")]
    Js(String),
}

impl ShareError {
    /// Classify a rejected browser promise by its `DOMException` name.
    pub fn from_exception(name: &str, message: &str) -> ShareError {
        match name {
            "AbortError" => ShareError::Cancelled,
            "NotAllowedError" => ShareError::NotAllowed(message.to_string()),
            "NotSupportedError" | "TypeError" => ShareError::Unsupported(message.to_string()),
            _ => ShareError::Js(format!("{}: {}", name, message)),
        }
    }
}
