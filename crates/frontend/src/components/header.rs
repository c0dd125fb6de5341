//! Navigation header.
//!
//! Renders the brand and a horizontal link list. The link set is derived from
//! the session user on every render: the three base links always, plus the
//! administration link for administrators. The link matching the current path
//! is marked active.

use askama::Template;
use precios_unitarios_core::CurrentUser;

/// Brand text shown at the left of the header.
pub const BRAND: &str = "Precios Unitarios";

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Links every visitor sees, in display order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink::new("/analisis", "Análisis PU"),
    NavLink::new("/catalogo", "Catálogo"),
    NavLink::new("/comparador", "Comparador"),
];

/// Appended after [`NAV_LINKS`] for administrators only.
pub const ADMIN_LINK: NavLink = NavLink::new("/admin", "Administración");

impl NavLink {
    #[must_use]
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    /// Whether this link is active for the given location.
    ///
    /// Active means the location is the link's path or lies below it
    /// (`/catalogo/42` activates `/catalogo`). Matching ignores ASCII case,
    /// like the router does. Query string, fragment and a trailing slash on
    /// the location are ignored.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        let path = current_path
            .split(['?', '#'])
            .next()
            .unwrap_or(current_path);
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match (path.get(..self.path.len()), path.get(self.path.len()..)) {
            (Some(head), Some(rest)) => {
                head.eq_ignore_ascii_case(self.path) && (rest.is_empty() || rest.starts_with('/'))
            }
            _ => false,
        }
    }
}

/// Links visible to a user, in display order.
///
/// An absent user is treated like a non-administrator.
#[must_use]
pub fn visible_links(user: Option<&CurrentUser>) -> Vec<NavLink> {
    let mut links = NAV_LINKS.to_vec();
    if CurrentUser::is_admin(user) {
        links.push(ADMIN_LINK);
    }
    links
}

/// A link as rendered: target, label and whether it is the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Header template.
#[derive(Debug, Template)]
#[template(path = "components/app_header.html")]
pub struct AppHeader {
    pub brand: &'static str,
    pub links: Vec<NavLinkView>,
}

impl AppHeader {
    /// Build the header for a user at a location.
    #[must_use]
    pub fn new(user: Option<&CurrentUser>, current_path: &str) -> Self {
        let links = visible_links(user)
            .into_iter()
            .map(|link| NavLinkView {
                path: link.path,
                label: link.label,
                active: link.is_active(current_path),
            })
            .collect();

        Self {
            brand: BRAND,
            links,
        }
    }
}
