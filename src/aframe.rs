use crate::registry::Registrar;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(inline_js = "
export function define_component(schema, onInit) {
    return {
        schema: schema,
        init: function () { onInit(this.el, this.data); }
    };
}
")]
extern "C" {
    fn define_component(schema: &JsValue, on_init: &js_sys::Function) -> JsValue;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AFRAME, js_name = registerComponent, catch)]
    fn register_component(name: &str, definition: &JsValue) -> Result<JsValue, JsValue>;
}

/// Schema plus the Rust side of `init(el, data)`.
pub struct ComponentDef {
    pub schema: serde_json::Value,
    pub init: fn(web::Element, JsValue),
}

fn to_js_definition(def: ComponentDef) -> anyhow::Result<JsValue> {
    let schema = js_sys::JSON::parse(&def.schema.to_string())
        .map_err(|e| anyhow::anyhow!("schema: {:?}", e))?;
    let init = def.init;
    let on_init = Closure::wrap(Box::new(move |el: web::Element, data: JsValue| {
        init(el, data);
    }) as Box<dyn FnMut(web::Element, JsValue)>);
    let definition = define_component(&schema, on_init.as_ref().unchecked_ref());
    // Components can be instantiated at any point while the page lives.
    on_init.forget();
    Ok(definition)
}

/// Hand every behavior to `AFRAME.registerComponent`.
/// Returns the number AFRAME accepted.
pub fn register_all(registrar: Registrar<ComponentDef>) -> usize {
    registrar.register_all(|name, def| {
        let definition = to_js_definition(def)?;
        register_component(name, &definition)
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("AFRAME rejected {}: {:?}", name, e))
    })
}
