//! # Nicknames
//!
//! A nickname names a server or a server group within one server
//! definition file. It must match `^[a-zA-Z0-9_]+$`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Validated server or server group nickname.
///
/// # Validation
///
/// - Must be non-empty.
/// - Must contain only ASCII letters, ASCII digits and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Create a nickname, validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNickname`] if the string is empty
    /// or contains characters outside `[a-zA-Z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidNickname(s))
        }
    }

    /// Check a string against the nickname pattern without constructing.
    pub fn is_valid(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Access the nickname string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Nickname {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for Nickname {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Nickname> for String {
    fn from(value: Nickname) -> Self {
        value.0
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
