//! Server-rendered UI components.
//!
//! Components take everything they show as explicit inputs (the session user,
//! the current path) and render through Askama templates under
//! `templates/components/`.

pub mod header;

pub use header::{ADMIN_LINK, AppHeader, BRAND, NAV_LINKS, NavLink, NavLinkView, visible_links};
