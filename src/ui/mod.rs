//! GUI panels and the root window.

pub mod active_units;
pub mod app;
pub mod bulletin_section;
pub mod components;
pub mod header;
pub mod list_panel;
pub mod reports_section;
pub mod sidebar;
pub mod toast;
pub mod warrants_section;

pub use app::MdtApp;
