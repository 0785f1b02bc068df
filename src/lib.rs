#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod aframe;
mod browser;
mod capture;
mod component;
mod compositor;
mod config;
mod constants;
mod dom;
mod error;
mod mime;
mod payload;
mod placement;
mod platform;
mod preview;
mod registry;
mod share;

use aframe::ComponentDef;
use registry::Registrar;

fn components() -> Registrar<ComponentDef> {
    Registrar::new().with(
        constants::COMPONENT_NAME,
        ComponentDef {
            schema: component::schema(),
            init: component::on_init,
        },
    )
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-share starting");

    let components = components();
    log::info!("[registry] components: {:?}", components.names());
    let registered = aframe::register_all(components);
    log::info!("[registry] {} component(s) registered", registered);
    Ok(())
}
