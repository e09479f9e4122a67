use crate::selectors::Selectors;

/// Start-up configuration. The host decides `editor_mode_enabled` once,
/// before any bootstrapper runs; nothing re-reads it afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleConfig {
    pub editor_mode_enabled: bool,
    pub selectors: Selectors,
}

impl ToggleConfig {
    pub fn with_editor_mode(mut self, enabled: bool) -> Self {
        self.editor_mode_enabled = enabled;
        self
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }
}
