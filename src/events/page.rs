use crate::constants::{content_still_loading, CONTENT_LOADED_EVENT, READY_STATE_KEY};
use crate::dom::WebHost;
use toggle_core::{PageBootstrapper, SharedRegistry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type Registry = SharedRegistry<WebHost>;

fn mount_sections(document: &web::Document, registry: &Registry) {
    match document.document_element() {
        Some(root) => {
            PageBootstrapper.run(&mut registry.borrow_mut(), &root);
        }
        None => log::warn!("[page] document has no root element"),
    }
}

fn ready_state(document: &web::Document) -> Option<String> {
    js_sys::Reflect::get(document, &JsValue::from_str(READY_STATE_KEY))
        .ok()
        .and_then(|v| v.as_string())
}

/// Mount every section once the document content is ready. The module may
/// load after DOMContentLoaded has already fired; then mount right away.
pub fn wire_content_loaded(document: &web::Document, registry: Registry) {
    if !content_still_loading(ready_state(document).as_deref()) {
        mount_sections(document, &registry);
        return;
    }
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        mount_sections(&doc, &registry);
    }) as Box<dyn FnMut()>);
    if let Err(e) = document
        .add_event_listener_with_callback(CONTENT_LOADED_EVENT, closure.as_ref().unchecked_ref())
    {
        log::error!("[page] could not listen for {}: {:?}", CONTENT_LOADED_EVENT, e);
    }
    closure.forget();
}
