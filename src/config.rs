use crate::constants::{ASSET_BASE, DEFAULT_SELECTOR};
use crate::placement::{fraction_from_percent, Anchor};
use serde::{Deserialize, Deserializer};

/// Options attached to one `screenshot-share` element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareConfig {
    pub selector: String,
    pub title: String,
    pub text: String,
    pub url: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub screenshot_mode: bool,
    #[serde(deserialize_with = "string_list")]
    pub watermarks: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub watermark_positions: Vec<String>,
    #[serde(deserialize_with = "percent_list")]
    pub watermark_max_widths: Vec<Option<f64>>,
    #[serde(deserialize_with = "percent_list")]
    pub watermark_max_heights: Vec<Option<f64>>,
    #[serde(deserialize_with = "string_list")]
    pub files: Vec<String>,
    pub folder: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            title: String::new(),
            text: String::new(),
            url: String::new(),
            screenshot_mode: false,
            watermarks: Vec::new(),
            watermark_positions: Vec::new(),
            watermark_max_widths: Vec::new(),
            watermark_max_heights: Vec::new(),
            files: Vec::new(),
            folder: String::new(),
        }
    }
}

/// Source and sizing for the watermark at one index of `watermarks`.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkRequest {
    pub src: String,
    pub anchor: Anchor,
    pub max_width_fraction: f64,
    pub max_height_fraction: f64,
}

impl ShareConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: ShareConfig = serde_json::from_str(json)?;
        if cfg.selector.trim().is_empty() {
            cfg.selector = DEFAULT_SELECTOR.to_string();
        }
        Ok(cfg)
    }

    /// `../assets/sharing/[folder/]name`
    pub fn asset_path(&self, name: &str) -> String {
        let folder = self.folder.trim_matches('/');
        let name = name.trim_start_matches('/');
        if folder.is_empty() {
            format!("{}/{}", ASSET_BASE, name)
        } else {
            format!("{}/{}/{}", ASSET_BASE, folder, name)
        }
    }

    /// Blank watermark names are skipped without shifting the other lists.
    pub fn watermark_requests(&self) -> Vec<WatermarkRequest> {
        self.watermarks
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(i, name)| WatermarkRequest {
                src: self.asset_path(name),
                anchor: Anchor::from_name(self.watermark_positions.get(i).map(String::as_str)),
                max_width_fraction: fraction_from_percent(
                    self.watermark_max_widths.get(i).copied().flatten(),
                ),
                max_height_fraction: fraction_from_percent(
                    self.watermark_max_heights.get(i).copied().flatten(),
                ),
            })
            .collect()
    }

    pub fn share_files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str).filter(|f| !f.is_empty())
    }

    /// Text placed on the clipboard when it cannot travel with the share.
    pub fn clipboard_text(&self) -> String {
        format!("{} {} {}", self.title, self.text, self.url)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrString {
    List(Vec<serde_json::Value>),
    Joined(String),
    Missing(()),
}

/// Positional: blank entries are kept so parallel lists stay aligned.
fn string_list<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(match ListOrString::deserialize(de)? {
        ListOrString::List(items) => items
            .into_iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.trim().to_string(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect(),
        ListOrString::Joined(s) => split_joined(&s),
        ListOrString::Missing(()) => Vec::new(),
    })
}

/// Positional: entries that are empty or not numbers stay as `None` so indices line up.
fn percent_list<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Option<f64>>, D::Error> {
    let raw: Vec<String> = match ListOrString::deserialize(de)? {
        ListOrString::List(items) => items
            .into_iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect(),
        ListOrString::Joined(s) => s.split(',').map(str::to_string).collect(),
        ListOrString::Missing(()) => Vec::new(),
    };
    Ok(raw
        .iter()
        .map(|s| s.trim().trim_end_matches('%').parse::<f64>().ok())
        .collect())
}

fn lenient_bool<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
        Missing(()),
    }
    Ok(match BoolLike::deserialize(de)? {
        BoolLike::Bool(b) => b,
        BoolLike::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        BoolLike::Missing(()) => false,
    })
}

fn split_joined(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(',').map(|p| p.trim().to_string()).collect()
}
