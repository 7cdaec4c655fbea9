//! Error types
//!
//! Defines domain-specific error types for each module of the crate.

use std::fmt;

/// Credential store errors
#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(reason) => {
                write!(f, "Credential store unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    UserNotFound(String),
    BadCredentials(String),
    MalformedInput(String),
    UsernameTaken(String),
    Hash(bcrypt::BcryptError),
    StoreUnavailable(StoreError),
}

impl AuthError {
    /// True for the failures a caller must not be able to tell apart:
    /// unknown user, wrong password, and rejected input all look the same
    /// from the outside.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            AuthError::UserNotFound(_)
                | AuthError::BadCredentials(_)
                | AuthError::MalformedInput(_)
        )
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::BadCredentials(u) => write!(f, "Invalid password for user: {}", u),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::UsernameTaken(u) => write!(f, "Username already taken: {}", u),
            AuthError::Hash(e) => write!(f, "Password hashing failed: {}", e),
            AuthError::StoreUnavailable(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Hash(e) => Some(e),
            AuthError::StoreUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        AuthError::StoreUnavailable(error)
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(error: bcrypt::BcryptError) -> Self {
        AuthError::Hash(error)
    }
}
