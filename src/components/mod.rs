//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod menu_tabs;
mod menu_card;
mod featured;
mod footer;

pub use header::Header;
pub use menu_tabs::MenuTabs;
pub use menu_card::MenuCard;
pub use featured::FeaturedSection;
pub use footer::Footer;
