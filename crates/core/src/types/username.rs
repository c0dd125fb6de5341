//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is empty or only whitespace.
    #[error("username cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A backend account name.
///
/// ## Constraints
///
/// - Length: 1-80 characters (the backend column width)
/// - Not blank; inner spaces are allowed
///
/// ## Examples
///
/// ```
/// use precios_unitarios_core::Username;
///
/// assert!(Username::parse("arquitecta").is_ok());
///
/// assert!(Username::parse("Juan Perez").is_ok());
///
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Maximum length of a username, in characters.
    pub const MAX_LENGTH: usize = 80;

    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than 80 characters.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        if s.trim().is_empty() {
            return Err(UsernameError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_usernames() {
        assert!(Username::parse("admin").is_ok());
        assert!(Username::parse("maria.lopez").is_ok());
        assert!(Username::parse("Ingeniería_2").is_ok());
        assert!(Username::parse(&"a".repeat(80)).is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Username::parse(""), Err(UsernameError::Empty)));
        assert!(matches!(Username::parse("   "), Err(UsernameError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Username::parse(&"a".repeat(81)),
            Err(UsernameError::TooLong { max: 80 })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 80 two-byte characters is still within the limit
        assert!(Username::parse(&"ñ".repeat(80)).is_ok());
    }

    #[test]
    fn test_parse_accepts_inner_whitespace() {
        let username = Username::parse("Juan Perez").unwrap();
        assert_eq!(username.as_str(), "Juan Perez");
    }

    #[test]
    fn test_serde_is_transparent() {
        let username = Username::parse("admin").unwrap();
        assert_eq!(serde_json::to_string(&username).unwrap(), "\"admin\"");

        let parsed: Username = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, username);
    }

    #[test]
    fn test_from_str_and_display() {
        let username: Username = "admin".parse().unwrap();
        assert_eq!(format!("{username}"), "admin");
    }
}
