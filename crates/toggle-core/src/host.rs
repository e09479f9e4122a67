//! Capability interface over whatever tree the widget runs against.
//!
//! The browser build implements this on top of `web_sys::Element`; tests and
//! native embedders use [`MemoryDom`](crate::MemoryDom). Selectors passed in
//! are always single-class selectors of the form `.<class>`.

use crate::error::HostResult;

pub type ClickHandler = Box<dyn FnMut()>;

pub trait ToggleHost {
    /// Handle to a node. Equality is identity.
    type Element: Clone + PartialEq + 'static;
    /// Token returned by [`ToggleHost::listen_click`], consumed to unbind.
    type Listener;

    /// All descendants of `root` matching `selector`, in document order.
    /// `root` itself is never included.
    fn query_all(&self, root: &Self::Element, selector: &str) -> HostResult<Vec<Self::Element>>;

    /// First descendant of `root` matching `selector`.
    fn query_first(
        &self,
        root: &Self::Element,
        selector: &str,
    ) -> HostResult<Option<Self::Element>>;

    /// `element` itself or its nearest ancestor matching `selector`.
    fn closest(&self, element: &Self::Element, selector: &str)
        -> HostResult<Option<Self::Element>>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Flip `class` on `element`, returning whether it is present afterwards.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> HostResult<bool>;

    fn listen_click(
        &self,
        element: &Self::Element,
        handler: ClickHandler,
    ) -> HostResult<Self::Listener>;

    fn unlisten_click(&self, listener: Self::Listener);
}
