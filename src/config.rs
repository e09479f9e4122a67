use crate::constants::{DESIGN_MODE_KEY, HOST_GLOBAL};
use toggle_core::ToggleConfig;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Read the start-up configuration from the page. Only the theme editor flag
/// comes from the host; class names keep their defaults.
pub fn from_window(window: &web::Window) -> ToggleConfig {
    ToggleConfig::default().with_editor_mode(design_mode(window))
}

// Truthiness check, matching `window.Shopify && window.Shopify.designMode`
fn design_mode(window: &web::Window) -> bool {
    let host = match js_sys::Reflect::get(window, &JsValue::from_str(HOST_GLOBAL)) {
        Ok(v) if v.is_object() => v,
        _ => return false,
    };
    js_sys::Reflect::get(&host, &JsValue::from_str(DESIGN_MODE_KEY))
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}
