use crate::host::ToggleHost;
use crate::selectors::Selectors;
use std::rc::Rc;

/// What a single trigger activation ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The message element's marker was flipped; `visible` is the new state.
    Toggled { visible: bool },
    /// The trigger has no enclosing wrapper.
    NoGroup,
    /// The wrapper holds no message element.
    NoMessage,
    /// The host reported an error; nothing was changed.
    Failed,
}

/// Run the click behaviour for `trigger`: nearest wrapper, then its message,
/// then flip the visibility marker. Lookups never leave the wrapper.
pub fn activate<H: ToggleHost>(host: &H, trigger: &H::Element, selectors: &Selectors) -> Activation {
    let group = match host.closest(trigger, &selectors.wrapper()) {
        Ok(Some(group)) => group,
        Ok(None) => return Activation::NoGroup,
        Err(e) => {
            log::debug!("[toggle] wrapper lookup failed: {e}");
            return Activation::Failed;
        }
    };
    let message = match host.query_first(&group, &selectors.message()) {
        Ok(Some(message)) => message,
        Ok(None) => return Activation::NoMessage,
        Err(e) => {
            log::debug!("[toggle] message lookup failed: {e}");
            return Activation::Failed;
        }
    };
    match host.toggle_class(&message, &selectors.visible_class) {
        Ok(visible) => Activation::Toggled { visible },
        Err(e) => {
            log::debug!("[toggle] class toggle failed: {e}");
            Activation::Failed
        }
    }
}

/// Binds every trigger inside one container to [`activate`].
///
/// Triggers are captured once at construction. Listeners stay bound until
/// [`ToggleWidget::dispose`] or drop.
pub struct ToggleWidget<H: ToggleHost> {
    host: Rc<H>,
    container: Option<H::Element>,
    triggers: Vec<H::Element>,
    listeners: Vec<H::Listener>,
    disposed: bool,
}

impl<H: ToggleHost + 'static> ToggleWidget<H> {
    /// An absent container yields an inert widget.
    pub fn new(host: Rc<H>, container: Option<&H::Element>, selectors: Rc<Selectors>) -> Self {
        let mut widget = Self {
            host,
            container: container.cloned(),
            triggers: Vec::new(),
            listeners: Vec::new(),
            disposed: false,
        };
        if let Some(container) = container {
            widget.bind(container, &selectors);
        }
        widget
    }

    fn bind(&mut self, container: &H::Element, selectors: &Rc<Selectors>) {
        let triggers = match self.host.query_all(container, &selectors.trigger()) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("[toggle] trigger scan failed: {e}");
                return;
            }
        };
        for trigger in &triggers {
            let host = Rc::downgrade(&self.host);
            let target = trigger.clone();
            let selectors = selectors.clone();
            let handler = Box::new(move || {
                if let Some(host) = host.upgrade() {
                    let outcome = activate(&*host, &target, &selectors);
                    log::trace!("[toggle] activation -> {outcome:?}");
                }
            });
            match self.host.listen_click(trigger, handler) {
                Ok(listener) => self.listeners.push(listener),
                Err(e) => log::warn!("[toggle] could not bind trigger: {e}"),
            }
        }
        log::debug!(
            "[toggle] bound {}/{} triggers",
            self.listeners.len(),
            triggers.len()
        );
        self.triggers = triggers;
    }
}

impl<H: ToggleHost> ToggleWidget<H> {
    pub fn container(&self) -> Option<&H::Element> {
        self.container.as_ref()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Unbind every listener. Safe to call more than once.
    pub fn dispose(&mut self) {
        let host = &self.host;
        for listener in self.listeners.drain(..) {
            host.unlisten_click(listener);
        }
        self.disposed = true;
    }
}

impl<H: ToggleHost> Drop for ToggleWidget<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
