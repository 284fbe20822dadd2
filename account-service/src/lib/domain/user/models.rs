use std::fmt;

use crate::user::errors::FieldError;
use crate::user::errors::ValidationErrors;

/// User aggregate entity.
///
/// Represents a registered account. The secret is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub handle: Handle,
    pub secret: Secret,
}

/// Store-assigned user identifier.
///
/// Assigned once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login name value type
///
/// Non-empty; compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub const FIELD: &'static str = "username";

    /// Create a new handle.
    ///
    /// # Arguments
    /// * `handle` - Sanitized handle string
    ///
    /// # Returns
    /// Handle value object
    ///
    /// # Errors
    /// * `FieldError` - Handle is empty
    pub fn new(handle: String) -> Result<Self, FieldError> {
        if handle.is_empty() {
            Err(FieldError::required(Self::FIELD))
        } else {
            Ok(Self(handle))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Password value type, stored and compared verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub const FIELD: &'static str = "password";

    /// Create a new secret.
    ///
    /// # Errors
    /// * `FieldError` - Secret is empty
    pub fn new(secret: String) -> Result<Self, FieldError> {
        if secret.is_empty() {
            Err(FieldError::required(Self::FIELD))
        } else {
            Ok(Self(secret))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// Handle and secret pair submitted by a caller.
///
/// Used for both registration and login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub handle: Handle,
    pub secret: Secret,
}

impl Credentials {
    /// Validate raw fields into credentials.
    ///
    /// Both fields are checked so every failing field is reported at once.
    ///
    /// # Arguments
    /// * `handle` - Sanitized handle string
    /// * `secret` - Sanitized secret string
    ///
    /// # Returns
    /// Validated credentials
    ///
    /// # Errors
    /// * `ValidationErrors` - One entry per failing field
    pub fn parse(handle: String, secret: String) -> Result<Self, ValidationErrors> {
        match (Handle::new(handle), Secret::new(secret)) {
            (Ok(handle), Ok(secret)) => Ok(Self { handle, secret }),
            (handle, secret) => Err(ValidationErrors::new(
                [handle.err(), secret.err()].into_iter().flatten().collect(),
            )),
        }
    }
}
