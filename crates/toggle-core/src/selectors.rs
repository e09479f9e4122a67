// Class-name contract shared with the section markup.

pub const SECTION_CLASS: &str = "dummy-section";
pub const TRIGGER_CLASS: &str = "dummy-btn";
pub const WRAPPER_CLASS: &str = "dummy-wrapper";
pub const MESSAGE_CLASS: &str = "dummy-msg";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Class names the widget looks for. Selectors are always `.<class>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub section_class: String,
    pub trigger_class: String,
    pub wrapper_class: String,
    pub message_class: String,
    pub visible_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            section_class: SECTION_CLASS.to_string(),
            trigger_class: TRIGGER_CLASS.to_string(),
            wrapper_class: WRAPPER_CLASS.to_string(),
            message_class: MESSAGE_CLASS.to_string(),
            visible_class: VISIBLE_CLASS.to_string(),
        }
    }
}

impl Selectors {
    pub fn section(&self) -> String {
        class_selector(&self.section_class)
    }

    pub fn trigger(&self) -> String {
        class_selector(&self.trigger_class)
    }

    pub fn wrapper(&self) -> String {
        class_selector(&self.wrapper_class)
    }

    pub fn message(&self) -> String {
        class_selector(&self.message_class)
    }
}

#[inline]
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}
