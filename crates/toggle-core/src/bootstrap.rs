//! Page-load and theme-editor entry points.
//!
//! Both bootstrappers hand containers to a shared [`SectionRegistry`], which
//! owns the widgets for as long as the page lives.

use crate::config::ToggleConfig;
use crate::host::ToggleHost;
use crate::selectors::Selectors;
use crate::widget::ToggleWidget;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Registry handle shared between the bootstrappers and event closures.
pub type SharedRegistry<H> = Rc<RefCell<SectionRegistry<H>>>;

thread_local! {
    static PAGE_LIFETIME: RefCell<Vec<Rc<dyn Any>>> = RefCell::new(Vec::new());
}

/// Keep `value` alive for the rest of the page (the owning thread).
///
/// Widgets unbind their listeners on drop, so the registry that owns them
/// must outlive start-up even when no event closure holds a clone.
pub fn retain_for_page<T: 'static>(value: Rc<T>) {
    PAGE_LIFETIME.with(|held| held.borrow_mut().push(value));
}

pub struct SectionRegistry<H: ToggleHost + 'static> {
    host: Rc<H>,
    selectors: Rc<Selectors>,
    widgets: Vec<ToggleWidget<H>>,
}

impl<H: ToggleHost + 'static> SectionRegistry<H> {
    pub fn new(host: Rc<H>, selectors: Selectors) -> Self {
        Self {
            host,
            selectors: Rc::new(selectors),
            widgets: Vec::new(),
        }
    }

    pub fn shared(host: Rc<H>, selectors: Selectors) -> SharedRegistry<H> {
        Rc::new(RefCell::new(Self::new(host, selectors)))
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Create a widget for `container` unless one is already live for it.
    /// Returns whether a new widget was created.
    pub fn mount(&mut self, container: &H::Element) -> bool {
        if self.is_mounted(container) {
            log::debug!("[toggle] container already mounted, skipping");
            return false;
        }
        let widget = ToggleWidget::new(
            self.host.clone(),
            Some(container),
            self.selectors.clone(),
        );
        self.widgets.push(widget);
        true
    }

    /// Dispose and forget the widget for `container`, if any.
    pub fn unmount(&mut self, container: &H::Element) -> bool {
        let before = self.widgets.len();
        self.widgets
            .retain(|w| w.container().map_or(true, |c| c != container));
        before != self.widgets.len()
    }

    pub fn is_mounted(&self, container: &H::Element) -> bool {
        self.widgets
            .iter()
            .any(|w| w.container().map_or(false, |c| c == container))
    }

    pub fn widgets(&self) -> &[ToggleWidget<H>] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Mounts one widget per section found under the document root.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageBootstrapper;

impl PageBootstrapper {
    /// Returns the number of widgets created.
    pub fn run<H: ToggleHost + 'static>(
        &self,
        registry: &mut SectionRegistry<H>,
        document_root: &H::Element,
    ) -> usize {
        let selector = registry.selectors().section();
        let sections = match registry.host().query_all(document_root, &selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("[page] section scan failed: {e}");
                return 0;
            }
        };
        let mounted = sections.iter().filter(|s| registry.mount(s)).count();
        log::info!("[page] mounted {mounted} of {} sections", sections.len());
        mounted
    }
}

/// Mounts widgets for sections the theme editor re-renders.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditorBootstrapper {
    active: bool,
}

impl EditorBootstrapper {
    pub fn new(config: &ToggleConfig) -> Self {
        Self {
            active: config.editor_mode_enabled,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a "section load" signal. Targets without the section class,
    /// and absent targets, are ignored.
    pub fn section_loaded<H: ToggleHost + 'static>(
        &self,
        registry: &mut SectionRegistry<H>,
        target: Option<&H::Element>,
    ) -> bool {
        if !self.active {
            return false;
        }
        let Some(target) = target else {
            return false;
        };
        if !registry
            .host()
            .has_class(target, &registry.selectors().section_class)
        {
            return false;
        }
        let mounted = registry.mount(target);
        if mounted {
            log::info!("[editor] section loaded, widget mounted");
        }
        mounted
    }

    /// Handle a "section unload" signal by disposing that section's widget.
    pub fn section_unloaded<H: ToggleHost + 'static>(
        &self,
        registry: &mut SectionRegistry<H>,
        target: Option<&H::Element>,
    ) -> bool {
        if !self.active {
            return false;
        }
        let removed = target.map_or(false, |t| registry.unmount(t));
        if removed {
            log::info!("[editor] section unloaded, widget disposed");
        }
        removed
    }
}
