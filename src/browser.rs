use crate::constants::SHARE_FRAME_HTML;
use crate::dom;
use crate::error::ShareError;
use crate::payload::SharePayload;
use crate::share::{AssetSource, Clipboard, Downloader, Notifier, ShareContext, ShareDeps};
use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(err: JsValue) -> ShareError {
    let (name, message) = dom::describe_js_error(&err);
    ShareError::from_exception(&name, &message)
}

fn payload_to_js(payload: &SharePayload<web::File>) -> JsValue {
    let data = Object::new();
    let fields = [
        ("title", &payload.title),
        ("text", &payload.text),
        ("url", &payload.url),
    ];
    for (key, value) in fields {
        if let Some(v) = value {
            _ = Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(v));
        }
    }
    if !payload.files.is_empty() {
        let files: Array = payload.files.iter().collect();
        _ = Reflect::set(&data, &JsValue::from_str("files"), &files);
    }
    data.into()
}

/// Call `target[method](arg)` and await the returned promise.
async fn call_async(target: &JsValue, method: &str, arg: &JsValue) -> Result<JsValue, ShareError> {
    let func = Reflect::get(target, &JsValue::from_str(method))
        .map_err(js_err)?
        .dyn_into::<Function>()
        .map_err(|_| ShareError::Unsupported(format!("{} is not available", method)))?;
    let promise = func
        .call1(target, arg)
        .map_err(js_err)?
        .dyn_into::<Promise>()
        .map_err(|_| ShareError::Js(format!("{} did not return a promise", method)))?;
    JsFuture::from(promise).await.map_err(js_err)
}

async fn share_via(window: &web::Window, payload: &SharePayload<web::File>) -> Result<(), ShareError> {
    let navigator: JsValue = window.navigator().into();
    call_async(&navigator, "share", &payload_to_js(payload)).await?;
    Ok(())
}

/// Shares through the page's own navigator.
pub struct MainNavigator;

#[async_trait(?Send)]
impl ShareContext<web::File> for MainNavigator {
    async fn invoke(&self, payload: &SharePayload<web::File>) -> Result<(), ShareError> {
        let window = web::window().ok_or_else(|| ShareError::Unsupported("no window".into()))?;
        share_via(&window, payload).await
    }

    fn reset(&self) {}
}

/// Hidden frame whose navigator performs repeated shares.
///
/// Some mobile browsers refuse every later `navigator.share` on a document once
/// one call was denied. Reloading a throwaway frame after each attempt keeps it
/// usable without touching the page.
pub struct ShareFrame {
    frame: web::HtmlIFrameElement,
}

impl ShareFrame {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let frame: web::HtmlIFrameElement = document
            .create_element("iframe")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let parts = Array::of1(&JsValue::from_str(SHARE_FRAME_HTML));
        let opts = web::BlobPropertyBag::new();
        opts.set_type("text/html");
        let blob = web::Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let src = web::Url::create_object_url_with_blob(&blob)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        frame.set_src(&src);
        _ = frame.style().set_property("display", "none");

        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        root.append_child(&frame)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { frame })
    }
}

#[async_trait(?Send)]
impl ShareContext<web::File> for ShareFrame {
    async fn invoke(&self, payload: &SharePayload<web::File>) -> Result<(), ShareError> {
        let window = self
            .frame
            .content_window()
            .ok_or_else(|| ShareError::Unsupported("share frame has no window".into()))?;
        share_via(&window, payload).await
    }

    fn reset(&self) {
        if let Some(window) = self.frame.content_window() {
            if let Err(e) = window.location().reload() {
                log::warn!("[share] frame reload failed: {:?}", e);
            }
        }
    }
}

/// Fetches assets over HTTP and wraps them as `File`s.
pub struct FetchAssets;

#[async_trait(?Send)]
impl AssetSource<web::File> for FetchAssets {
    async fn fetch(&self, path: &str, name: &str, mime: &str) -> Result<web::File, ShareError> {
        let fetch_err = |reason: String| ShareError::Fetch {
            path: path.to_string(),
            reason,
        };
        let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
        let response: web::Response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| fetch_err(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| fetch_err("not a response".into()))?;
        if !response.ok() {
            return Err(fetch_err(format!("HTTP {}", response.status())));
        }
        let blob = JsFuture::from(response.blob().map_err(|e| fetch_err(format!("{:?}", e)))?)
            .await
            .map_err(|e| fetch_err(format!("{:?}", e)))?;
        let opts = web::FilePropertyBag::new();
        opts.set_type(mime);
        web::File::new_with_blob_sequence_and_options(&Array::of1(&blob), name, &opts)
            .map_err(|e| fetch_err(format!("{:?}", e)))
    }
}

pub struct NavigatorClipboard;

#[async_trait(?Send)]
impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let window = web::window().ok_or_else(|| ShareError::Clipboard("no window".into()))?;
        let Some(clipboard) = window.navigator().clipboard() else {
            return Err(ShareError::Clipboard("clipboard API unavailable".into()));
        };
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| {
                let (name, message) = dom::describe_js_error(&e);
                ShareError::Clipboard(format!("{}: {}", name, message))
            })
    }
}

pub struct AnchorDownloader;

impl Downloader for AnchorDownloader {
    fn download(&self, href: &str, filename: &str) -> Result<(), ShareError> {
        dom::save_as(href, filename).map_err(|e| ShareError::Js(e.to_string()))
    }
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        log::info!("[share] notice: {}", message);
        dom::alert(message);
    }
}

pub fn browser_deps(document: &web::Document) -> anyhow::Result<ShareDeps<web::File>> {
    Ok(ShareDeps {
        main: Rc::new(MainNavigator),
        isolated: Rc::new(ShareFrame::attach(document)?),
        assets: Rc::new(FetchAssets),
        clipboard: Rc::new(NavigatorClipboard),
        downloader: Rc::new(AnchorDownloader),
        notifier: Rc::new(AlertNotifier),
    })
}
