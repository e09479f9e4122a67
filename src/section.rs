use crate::dom::WebHost;
use std::rc::Rc;
use toggle_core::{Selectors, ToggleWidget};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Manual mounting from JavaScript: `new ToggleSection(el)`.
/// Listeners are removed by `dispose()` or when the object is freed.
#[wasm_bindgen]
pub struct ToggleSection {
    widget: ToggleWidget<WebHost>,
}

#[wasm_bindgen]
impl ToggleSection {
    #[wasm_bindgen(constructor)]
    pub fn new(container: Option<web::Element>) -> ToggleSection {
        let widget = ToggleWidget::new(
            Rc::new(WebHost),
            container.as_ref(),
            Rc::new(Selectors::default()),
        );
        ToggleSection { widget }
    }

    #[wasm_bindgen(js_name = triggerCount)]
    pub fn trigger_count(&self) -> usize {
        self.widget.trigger_count()
    }

    pub fn dispose(&mut self) {
        self.widget.dispose();
    }
}
