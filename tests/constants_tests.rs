// Host-side tests for the lifecycle constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn content_loading_follows_ready_state() {
    assert!(content_still_loading(Some("loading")));
    assert!(!content_still_loading(Some("interactive")));
    assert!(!content_still_loading(Some("complete")));
    // no readable state: wait for the event rather than scanning a partial page
    assert!(content_still_loading(None));
}

#[test]
fn editor_events_are_namespaced() {
    assert!(SECTION_LOAD_EVENT.starts_with("shopify:section:"));
    assert!(SECTION_UNLOAD_EVENT.starts_with("shopify:section:"));
    assert_ne!(SECTION_LOAD_EVENT, SECTION_UNLOAD_EVENT);
    assert_eq!(CONTENT_LOADED_EVENT, "DOMContentLoaded");
    assert_eq!(CLICK_EVENT, "click");
}

#[test]
fn design_mode_is_read_from_the_host_global() {
    assert_eq!(HOST_GLOBAL, "Shopify");
    assert_eq!(DESIGN_MODE_KEY, "designMode");
}
