// Host lifecycle contract: event names and globals the storefront exposes.

pub const CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";
pub const CLICK_EVENT: &str = "click";

// Theme editor events, dispatched on the section element and bubbling to the document
pub const SECTION_LOAD_EVENT: &str = "shopify:section:load";
pub const SECTION_UNLOAD_EVENT: &str = "shopify:section:unload";

// `window.Shopify.designMode`
pub const HOST_GLOBAL: &str = "Shopify";
pub const DESIGN_MODE_KEY: &str = "designMode";

pub const READY_STATE_KEY: &str = "readyState";
pub const READY_STATE_LOADING: &str = "loading";

/// Whether a `document.readyState` value means DOMContentLoaded is still ahead.
#[inline]
pub fn content_still_loading(ready_state: Option<&str>) -> bool {
    ready_state.map_or(true, |s| s == READY_STATE_LOADING)
}
