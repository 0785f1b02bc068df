use crate::constants::{
    PREVIEW_BUTTONS_ID, PREVIEW_CLOSE_ID, PREVIEW_CONTAINER_ID, PREVIEW_DOWNLOAD_ID,
    PREVIEW_IMAGE_ID, PREVIEW_SHARE_ID, TAPPABLE_CLASS,
};
use crate::dom;
use web_sys as web;

fn preview_markup() -> String {
    format!(
        "<div id=\"{container}\">\
           <button id=\"{close}\" class=\"{tap}\">&#x2715;</button>\
           <div id=\"{buttons}\">\
             <div id=\"{download}\" class=\"{tap}\">DOWNLOAD</div>\
             <div id=\"{share}\" class=\"{tap}\">SHARE</div>\
           </div>\
         </div>",
        container = PREVIEW_CONTAINER_ID,
        close = PREVIEW_CLOSE_ID,
        buttons = PREVIEW_BUTTONS_ID,
        download = PREVIEW_DOWNLOAD_ID,
        share = PREVIEW_SHARE_ID,
        tap = TAPPABLE_CLASS,
    )
}

/// Overlay showing the latest capture with close, download and share controls.
pub struct Preview {
    document: web::Document,
    container: web::Element,
}

impl Preview {
    /// Inject the overlay into `host` and wire its controls. Call once.
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        on_download: impl FnMut() + 'static,
        on_share: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        host.insert_adjacent_html("beforeend", &preview_markup())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let container = document
            .get_element_by_id(PREVIEW_CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", PREVIEW_CONTAINER_ID))?;

        let close_target = container.clone();
        dom::add_click_listener_by_id(document, PREVIEW_CLOSE_ID, move || {
            dom::set_display(&close_target, "none");
        });
        dom::add_click_listener_by_id(document, PREVIEW_DOWNLOAD_ID, on_download);
        dom::add_click_listener_by_id(document, PREVIEW_SHARE_ID, on_share);

        Ok(Self {
            document: document.clone(),
            container,
        })
    }

    /// Replace the previous preview image with `canvas` and show the overlay.
    pub fn show(&self, canvas: &web::HtmlCanvasElement) {
        if let Some(old) = self.document.get_element_by_id(PREVIEW_IMAGE_ID) {
            old.remove();
        }
        canvas.set_id(PREVIEW_IMAGE_ID);
        if let Err(e) = self.container.prepend_with_node_1(canvas) {
            log::warn!("[preview] could not insert capture: {:?}", e);
        }
        dom::set_display(&self.container, "flex");
    }
}
