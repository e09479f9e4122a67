pub mod bootstrap;
pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod selectors;
pub mod widget;

pub use bootstrap::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use memory::MemoryDom;
pub use selectors::*;
pub use widget::*;
