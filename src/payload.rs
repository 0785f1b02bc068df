use crate::config::ShareConfig;

/// Data handed to one native share invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload<F> {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub files: Vec<F>,
}

impl<F> SharePayload<F> {
    /// Metadata rides along only when the platform accepts text and files together.
    pub fn compose(config: &ShareConfig, joint: bool, files: Vec<F>) -> Self {
        if joint {
            Self {
                title: Some(config.title.clone()),
                text: Some(config.text.clone()),
                url: Some(config.url.clone()),
                files,
            }
        } else {
            Self {
                title: None,
                text: None,
                url: None,
                files,
            }
        }
    }

    /// Title/text/url only.
    pub fn text_only(config: &ShareConfig) -> Self {
        Self {
            title: Some(config.title.clone()),
            text: Some(config.text.clone()),
            url: Some(config.url.clone()),
            files: Vec::new(),
        }
    }
}
