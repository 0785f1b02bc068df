use crate::config::ShareConfig;
use crate::constants::{CAPTURE_FILENAME, NOTICE_FALLBACK, NOTICE_TEXT_COPIED};
use crate::error::ShareError;
use crate::mime::mime_for;
use crate::payload::SharePayload;
use async_trait::async_trait;
use futures::future::join_all;
use std::rc::Rc;

/// Somewhere a native share can be invoked from.
#[async_trait(?Send)]
pub trait ShareContext<F> {
    async fn invoke(&self, payload: &SharePayload<F>) -> Result<(), ShareError>;

    /// Return the context to a usable state after an attempt.
    fn reset(&self);
}

/// Loads a shareable asset and wraps it as a file handle.
#[async_trait(?Send)]
pub trait AssetSource<F> {
    async fn fetch(&self, path: &str, name: &str, mime: &str) -> Result<F, ShareError>;
}

#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

pub trait Downloader {
    fn download(&self, href: &str, filename: &str) -> Result<(), ShareError>;
}

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Everything the orchestrator talks to. Each piece can be stubbed in tests.
pub struct ShareDeps<F> {
    /// The page's own navigator.
    pub main: Rc<dyn ShareContext<F>>,
    /// Isolated context used for repeated shares from the preview.
    pub isolated: Rc<dyn ShareContext<F>>,
    pub assets: Rc<dyn AssetSource<F>>,
    pub clipboard: Rc<dyn Clipboard>,
    pub downloader: Rc<dyn Downloader>,
    pub notifier: Rc<dyn Notifier>,
}

impl<F> Clone for ShareDeps<F> {
    fn clone(&self) -> Self {
        Self {
            main: self.main.clone(),
            isolated: self.isolated.clone(),
            assets: self.assets.clone(),
            clipboard: self.clipboard.clone(),
            downloader: self.downloader.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    FellBack { copied: bool, downloads: usize },
}

pub struct Sharer<F> {
    deps: ShareDeps<F>,
}

impl<F: 'static> Sharer<F> {
    pub fn new(deps: ShareDeps<F>) -> Self {
        Self { deps }
    }

    /// Fetch every configured file concurrently; failures are logged and skipped.
    /// Order follows the configuration.
    pub async fn gather_files(&self, config: &ShareConfig) -> Vec<F> {
        let fetches = config.share_files().map(|name| {
            let path = config.asset_path(name);
            let assets = self.deps.assets.clone();
            async move {
                let result = assets.fetch(&path, name, mime_for(name)).await;
                (name, result)
            }
        });
        join_all(fetches)
            .await
            .into_iter()
            .filter_map(|(name, result)| match result {
                Ok(file) => Some(file),
                Err(err) => {
                    log::warn!("[share] skipping {}: {}", name, err);
                    None
                }
            })
            .collect()
    }

    /// Like `gather_files`, but only yields a list when every configured file loaded.
    pub async fn prefetch(&self, config: &ShareConfig) -> Option<Vec<F>> {
        let wanted = config.share_files().count();
        let files = self.gather_files(config).await;
        if files.len() == wanted {
            Some(files)
        } else {
            log::warn!(
                "[share] prefetched {} of {} files; loading again on click",
                files.len(),
                wanted
            );
            None
        }
    }

    /// Share from the trigger element: files when configured, otherwise text only.
    pub async fn share(&self, config: &ShareConfig, joint: bool) -> ShareOutcome {
        if config.share_files().next().is_none() {
            let payload = SharePayload::text_only(config);
            return self.invoke_or_fall_back(config, &payload, &[]).await;
        }
        let files = self.gather_files(config).await;
        self.share_with_files(config, joint, files).await
    }

    /// Share already loaded files in a single native call.
    pub async fn share_with_files(
        &self,
        config: &ShareConfig,
        joint: bool,
        files: Vec<F>,
    ) -> ShareOutcome {
        let wanted = config.share_files().count();
        if files.is_empty() && wanted > 0 {
            // Nothing loaded: share the text alone and never offer the missing files.
            log::warn!("[share] none of {} files loaded; sharing text only", wanted);
            let payload = SharePayload::text_only(config);
            return self.invoke_or_fall_back(config, &payload, &[]).await;
        }
        if files.len() < wanted {
            log::warn!("[share] sharing {} of {} files", files.len(), wanted);
        }
        let downloads: Vec<(String, String)> = config
            .share_files()
            .map(|name| (config.asset_path(name), name.to_string()))
            .collect();
        let payload = SharePayload::compose(config, joint, files);
        self.invoke_or_fall_back(config, &payload, &downloads).await
    }

    /// Share a composited capture through the isolated context.
    /// The context is reset after every attempt.
    pub async fn share_capture(
        &self,
        config: &ShareConfig,
        joint: bool,
        capture: F,
        capture_href: &str,
    ) -> ShareOutcome {
        let payload = SharePayload::compose(config, joint, vec![capture]);
        let text = config.clipboard_text();
        // Both calls must start inside the same user gesture.
        let share = self.deps.isolated.invoke(&payload);
        let copy = async {
            if joint {
                None
            } else {
                Some(self.deps.clipboard.write_text(&text).await)
            }
        };
        let (result, copied) = futures::join!(share, copy);
        self.deps.isolated.reset();

        let copied = match copied {
            Some(Ok(())) => true,
            Some(Err(err)) => {
                log::warn!("[share] could not copy text: {}", err);
                false
            }
            None => false,
        };

        let outcome = match result {
            Ok(()) => {
                log::info!("[share] capture shared");
                ShareOutcome::Shared
            }
            Err(ShareError::Cancelled) => {
                log::info!("[share] capture share cancelled");
                ShareOutcome::Cancelled
            }
            Err(err) => {
                log::warn!("[share] capture share failed: {}", err);
                let downloads = [(capture_href.to_string(), CAPTURE_FILENAME.to_string())];
                return self.fall_back(config, &downloads, copied).await;
            }
        };
        if copied {
            self.deps.notifier.notify(NOTICE_TEXT_COPIED);
        }
        outcome
    }

    async fn invoke_or_fall_back(
        &self,
        config: &ShareConfig,
        payload: &SharePayload<F>,
        downloads: &[(String, String)],
    ) -> ShareOutcome {
        match self.deps.main.invoke(payload).await {
            Ok(()) => {
                log::info!("[share] shared {} file(s)", payload.files.len());
                ShareOutcome::Shared
            }
            Err(err) => {
                log::warn!("[share] native share failed: {}", err);
                self.fall_back(config, downloads, false).await
            }
        }
    }

    /// Copy the text (unless that already happened) and hand every file to the
    /// user as a download. One notice at most.
    async fn fall_back(
        &self,
        config: &ShareConfig,
        downloads: &[(String, String)],
        already_copied: bool,
    ) -> ShareOutcome {
        let copied = already_copied
            || match self.deps.clipboard.write_text(&config.clipboard_text()).await {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("[share] clipboard fallback failed: {}", err);
                    false
                }
            };
        let mut started = 0;
        for (href, filename) in downloads {
            match self.deps.downloader.download(href, filename) {
                Ok(()) => started += 1,
                Err(err) => log::warn!("[share] download of {} failed: {}", filename, err),
            }
        }
        if copied || started > 0 {
            self.deps.notifier.notify(NOTICE_FALLBACK);
        }
        ShareOutcome::FellBack {
            copied,
            downloads: started,
        }
    }
}
