//! Header rendering command.

use askama::Template;
use precios_unitarios_frontend::components::AppHeader;

use super::{CliError, Session, print_text};

/// Render the navigation header for the session user at `path`.
///
/// Without credentials the header renders for an anonymous visitor.
pub fn render(session: &Session, path: &str) -> Result<(), CliError> {
    let html = AppHeader::new(session.user.as_ref(), path).render()?;
    print_text(&html);
    Ok(())
}
