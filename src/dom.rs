use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener_by_id(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_click_listener(&el, handler);
    }
}

/// Show or hide an element through its inline `display` style.
pub fn set_display(el: &web::Element, display: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", display);
    } else {
        _ = el.set_attribute("style", &format!("display:{}", display));
    }
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

/// Save `uri` as `filename` through a temporary anchor; opens it in a new
/// window when the browser lacks the `download` attribute.
pub fn save_as(uri: &str, filename: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let link: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let supports_download =
        js_sys::Reflect::has(&link, &JsValue::from_str("download")).unwrap_or(false);
    if !supports_download {
        window
            .open_with_url(uri)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        return Ok(());
    }

    link.set_href(uri);
    link.set_download(filename);
    // Firefox only follows links that are in the document.
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.click();
    _ = body.remove_child(&link);
    Ok(())
}

/// Push `{event}` onto `window.dataLayer` when a tag manager is present.
pub fn push_data_layer_event(event: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(layer) = js_sys::Reflect::get(&window, &JsValue::from_str("dataLayer")) else {
        return;
    };
    let Some(layer) = layer.dyn_ref::<js_sys::Array>() else {
        return;
    };
    let entry = js_sys::Object::new();
    _ = js_sys::Reflect::set(&entry, &JsValue::from_str("event"), &JsValue::from_str(event));
    layer.push(&entry);
}

/// `(name, message)` of a thrown or rejected value.
pub fn describe_js_error(err: &JsValue) -> (String, String) {
    if let Some(ex) = err.dyn_ref::<web::DomException>() {
        return (ex.name(), ex.message());
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return (String::from(e.name()), String::from(e.message()));
    }
    ("Error".to_string(), format!("{:?}", err))
}
