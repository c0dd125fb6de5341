//! Session and authentication payloads.

use serde::{Deserialize, Serialize};

use super::{UserId, Username};

/// The logged-in user, as reported by the backend session.
///
/// This is the value the navigation header consumes. It is created by the
/// backend's authentication flow and is read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// Account name.
    pub username: Username,
    /// Whether the user may see the administration section.
    ///
    /// Older backend deployments omit the field; that reads as `false`.
    #[serde(default)]
    pub is_admin: bool,
}

impl CurrentUser {
    /// Whether an optional session user is an administrator.
    ///
    /// No user (unauthenticated) is never an administrator.
    #[must_use]
    pub fn is_admin(user: Option<&Self>) -> bool {
        user.is_some_and(|u| u.is_admin)
    }
}

/// Response to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Status text (`"OK"` on success).
    pub message: String,
    /// The user that is now logged in.
    pub user: CurrentUser,
}

/// Generic `{"message": "..."}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
