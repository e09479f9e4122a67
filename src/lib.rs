#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use toggle_core::{retain_for_page, EditorBootstrapper, SectionRegistry};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod section;

pub use section::ToggleSection;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("section-toggle starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Read once; the editor flag does not change for the life of the page
    let config = config::from_window(&window);
    log::info!("[editor] design mode: {}", config.editor_mode_enabled);

    let registry = SectionRegistry::shared(Rc::new(dom::WebHost), config.selectors.clone());
    // Page widgets unbind on drop; the registry must live as long as the page
    retain_for_page(registry.clone());

    events::wire_content_loaded(&document, registry.clone());

    let editor = EditorBootstrapper::new(&config);
    if editor.is_active() {
        events::wire_section_events(&document, registry, editor);
    }
    Ok(())
}
