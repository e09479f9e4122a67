use crate::constants::CLICK_EVENT;
use toggle_core::{ClickHandler, HostError, HostResult, ToggleHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_error(e: JsValue) -> HostError {
    HostError::Js(format!("{:?}", e))
}

/// `ToggleHost` over the live browser DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebHost;

pub struct WebListener {
    element: web::Element,
    closure: Closure<dyn FnMut()>,
}

impl ToggleHost for WebHost {
    type Element = web::Element;
    type Listener = WebListener;

    fn query_all(&self, root: &web::Element, selector: &str) -> HostResult<Vec<web::Element>> {
        let list = root.query_selector_all(selector).map_err(js_error)?;
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
        Ok(out)
    }

    fn query_first(&self, root: &web::Element, selector: &str) -> HostResult<Option<web::Element>> {
        root.query_selector(selector).map_err(js_error)
    }

    fn closest(&self, element: &web::Element, selector: &str) -> HostResult<Option<web::Element>> {
        element.closest(selector).map_err(js_error)
    }

    fn has_class(&self, element: &web::Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn toggle_class(&self, element: &web::Element, class: &str) -> HostResult<bool> {
        element.class_list().toggle(class).map_err(js_error)
    }

    fn listen_click(&self, element: &web::Element, handler: ClickHandler) -> HostResult<WebListener> {
        let closure = Closure::wrap(handler);
        element
            .add_event_listener_with_callback(CLICK_EVENT, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(WebListener {
            element: element.clone(),
            closure,
        })
    }

    fn unlisten_click(&self, listener: WebListener) {
        _ = listener.element.remove_event_listener_with_callback(
            CLICK_EVENT,
            listener.closure.as_ref().unchecked_ref(),
        );
    }
}
