pub mod editor;
pub mod page;

pub use editor::wire_section_events;
pub use page::wire_content_loaded;
