//! Session commands.

use super::{CliError, Session, print_json, print_text};

/// Show the session user as the backend reports it.
pub async fn me(session: &Session) -> Result<(), CliError> {
    match session.client.current_user().await? {
        Some(user) => print_json(&user),
        None => {
            print_text("not logged in");
            Ok(())
        }
    }
}
