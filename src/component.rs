use crate::browser;
use crate::capture::{self, Capture};
use crate::compositor::Watermarks;
use crate::config::ShareConfig;
use crate::constants::{
    CAPTURE_FILENAME, DEFAULT_SELECTOR, EVENT_DOWNLOAD_CLICKED, EVENT_SHARE_CLICKED,
};
use crate::dom;
use crate::platform;
use crate::preview::Preview;
use crate::share::{ShareOutcome, Sharer};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A-Frame property schema for `screenshot-share`.
pub fn schema() -> serde_json::Value {
    json!({
        "selector": { "type": "string", "default": DEFAULT_SELECTOR },
        "title": { "type": "string" },
        "text": { "type": "string" },
        "url": { "type": "string" },
        "screenshotMode": { "type": "boolean", "default": false },
        "watermarks": { "type": "array" },
        "watermarkPositions": { "type": "array" },
        "watermarkMaxWidths": { "type": "array" },
        "watermarkMaxHeights": { "type": "array" },
        "files": { "type": "array" },
        "folder": { "type": "string" }
    })
}

/// Entry point A-Frame calls from the component's `init`.
pub fn on_init(el: web::Element, data: JsValue) {
    let json = match js_sys::JSON::stringify(&data) {
        Ok(s) => String::from(s),
        Err(e) => {
            log::error!("[share] unreadable component data: {:?}", e);
            return;
        }
    };
    let config = match ShareConfig::from_json(&json) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[share] invalid component data: {}", e);
            return;
        }
    };
    if let Err(e) = ScreenshotShare::attach(el, config) {
        log::error!("[share] init error: {:?}", e);
    }
}

fn joint_share_supported() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let nav = window.navigator();
    platform::can_share_together(
        &nav.user_agent().unwrap_or_default(),
        &nav.app_version().unwrap_or_default(),
    )
}

struct ScreenshotShare {
    config: ShareConfig,
    document: web::Document,
    scene: web::Element,
    sharer: Sharer<web::File>,
    watermarks: Watermarks,
    preview: RefCell<Option<Preview>>,
    capture: RefCell<Option<Capture>>,
    prefetched: RefCell<Option<Vec<web::File>>>,
    busy: Cell<bool>,
}

impl ScreenshotShare {
    fn attach(el: web::Element, config: ShareConfig) -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let scene = js_sys::Reflect::get(&el, &JsValue::from_str("sceneEl"))
            .ok()
            .and_then(|v| v.dyn_into::<web::Element>().ok())
            .unwrap_or_else(|| el.clone());

        let trigger = document
            .query_selector(&config.selector)
            .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", config.selector, e))?
            .ok_or_else(|| anyhow::anyhow!("no element matches {}", config.selector))?;

        let watermarks = Watermarks::load(&config.watermark_requests());
        let sharer = Sharer::new(browser::browser_deps(&document)?);
        log::info!(
            "[share] attached to {} (screenshot={}, watermarks={}, files={})",
            config.selector,
            config.screenshot_mode,
            config.watermarks.len(),
            config.files.len()
        );

        let this = Rc::new(Self {
            config,
            document,
            scene,
            sharer,
            watermarks,
            preview: RefCell::new(None),
            capture: RefCell::new(None),
            prefetched: RefCell::new(None),
            busy: Cell::new(false),
        });
        this.prefetch_files();

        // The trigger listener keeps the component alive for the page's lifetime.
        dom::add_click_listener(&trigger, move || this.on_trigger());
        Ok(())
    }

    /// Load shareable files ahead of the click so the share call stays inside the gesture.
    /// An incomplete set is not kept; the click then loads the files itself.
    fn prefetch_files(self: &Rc<Self>) {
        if self.config.share_files().next().is_none() {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            if let Some(files) = this.sharer.prefetch(&this.config).await {
                log::info!("[share] prefetched {} file(s)", files.len());
                *this.prefetched.borrow_mut() = Some(files);
            }
        });
    }

    /// Runs `task` unless another share or capture is still pending.
    fn run_exclusive<Fut>(self: &Rc<Self>, task: impl FnOnce(Rc<Self>) -> Fut)
    where
        Fut: std::future::Future<Output = ()> + 'static,
    {
        if self.busy.replace(true) {
            log::info!("[share] still busy; ignoring click");
            return;
        }
        let this = self.clone();
        let fut = task(self.clone());
        spawn_local(async move {
            fut.await;
            this.busy.set(false);
        });
    }

    fn on_trigger(self: &Rc<Self>) {
        self.run_exclusive(|this| async move {
            let joint = joint_share_supported();
            if this.config.share_files().next().is_some() {
                let files = this.prefetched.borrow().clone();
                let outcome = match files {
                    Some(files) => this.sharer.share_with_files(&this.config, joint, files).await,
                    None => this.sharer.share(&this.config, joint).await,
                };
                log::info!("[share] outcome: {:?}", outcome);
            } else if this.config.screenshot_mode {
                if let Err(e) = this.capture_and_preview().await {
                    log::error!("[capture] {:?}", e);
                }
            } else {
                let outcome = this.sharer.share(&this.config, joint).await;
                log::info!("[share] outcome: {:?}", outcome);
            }
        });
    }

    async fn capture_and_preview(self: &Rc<Self>) -> anyhow::Result<()> {
        let canvas = capture::capture_body().await?;
        if let Err(e) = self.watermarks.composite(&canvas) {
            log::warn!("[watermark] compositing failed: {:?}", e);
        }
        let capture = capture::finish(canvas).await?;
        self.ensure_preview()?;
        if let Some(preview) = self.preview.borrow().as_ref() {
            preview.show(&capture.canvas);
        }
        *self.capture.borrow_mut() = Some(capture);
        Ok(())
    }

    fn ensure_preview(self: &Rc<Self>) -> anyhow::Result<()> {
        if self.preview.borrow().is_some() {
            return Ok(());
        }
        let on_download = handler(self, |this| this.download_capture());
        let on_share = handler(self, |this| this.share_capture());
        let preview = Preview::mount(&self.document, &self.scene, on_download, on_share)?;
        *self.preview.borrow_mut() = Some(preview);
        Ok(())
    }

    fn download_capture(self: &Rc<Self>) {
        dom::push_data_layer_event(EVENT_DOWNLOAD_CLICKED);
        let Some(url) = self.capture.borrow().as_ref().map(|c| c.data_url.clone()) else {
            return;
        };
        if let Err(e) = dom::save_as(&url, CAPTURE_FILENAME) {
            log::warn!("[capture] download failed: {:?}", e);
        }
    }

    fn share_capture(self: &Rc<Self>) {
        dom::push_data_layer_event(EVENT_SHARE_CLICKED);
        let Some(capture) = self.capture.borrow().clone() else {
            return;
        };
        self.run_exclusive(move |this| async move {
            let joint = joint_share_supported();
            let outcome = this
                .sharer
                .share_capture(&this.config, joint, capture.file, &capture.data_url)
                .await;
            if outcome != ShareOutcome::Shared {
                log::info!("[share] capture outcome: {:?}", outcome);
            }
        });
    }
}

fn handler(
    this: &Rc<ScreenshotShare>,
    action: impl Fn(&Rc<ScreenshotShare>) + 'static,
) -> impl FnMut() + 'static {
    let weak: Weak<ScreenshotShare> = Rc::downgrade(this);
    move || {
        if let Some(this) = weak.upgrade() {
            action(&this);
        }
    }
}
