//! Tab management.
//!
//! - `page` - TabPage wrapper keeping inactive tab content alive but hidden
//! - `registry` - the single tab.key -> View mapping
//! - `tab_labels` - the single source of truth for tab titles
//! - `tabs_bar` - the clickable strip of opened tabs

pub mod page;
pub mod registry;
pub mod tab_labels;
pub mod tabs_bar;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
pub use tabs_bar::TabsBar;
