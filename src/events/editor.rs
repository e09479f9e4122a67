use crate::constants::{SECTION_LOAD_EVENT, SECTION_UNLOAD_EVENT};
use crate::dom::WebHost;
use toggle_core::{EditorBootstrapper, SharedRegistry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type Registry = SharedRegistry<WebHost>;

fn on_section_event(
    document: &web::Document,
    event_name: &str,
    mut handler: impl FnMut(Option<web::Element>) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
        handler(target);
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) =
        document.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
    {
        log::error!("[editor] could not listen for {}: {:?}", event_name, e);
    }
    closure.forget();
}

/// Theme editor hooks: mount re-rendered sections, dispose removed ones.
pub fn wire_section_events(document: &web::Document, registry: Registry, editor: EditorBootstrapper) {
    let load_registry = registry.clone();
    on_section_event(document, SECTION_LOAD_EVENT, move |target| {
        editor.section_loaded(&mut load_registry.borrow_mut(), target.as_ref());
    });
    on_section_event(document, SECTION_UNLOAD_EVENT, move |target| {
        editor.section_unloaded(&mut registry.borrow_mut(), target.as_ref());
    });
    log::info!("[editor] listening for section load/unload");
}
