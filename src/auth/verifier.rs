//! Credential verifier
//!
//! Turns `(username, plaintext password)` pairs into authenticated
//! principals. The credential store is injected at construction time, so
//! the verifier works against any `CredentialStore` implementation.

use std::sync::Arc;

use log::{info, warn};

use crate::auth::hasher;
use crate::auth::principal::Principal;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::store::{CredentialStore, UserRecord};

/// Usernames longer than this are rejected before any store lookup.
const MAX_USERNAME_LENGTH: usize = 64;

/// bcrypt only reads the first 72 bytes of the password; longer inputs are
/// rejected outright rather than silently truncated.
const MAX_PASSWORD_LENGTH: usize = 72;

/// Stateless credential verification over an injected store.
///
/// Every call is independent: no counters, no lockout, no mutation outside
/// of `register`. Safe to share across threads behind an `Arc`.
pub struct CredentialVerifier {
    store: Arc<dyn CredentialStore>,
    hash_cost: u32,
    /// Throwaway hash compared against when the username does not exist,
    /// so the unknown-user path costs the same bcrypt work as the
    /// wrong-password path.
    equalizer_hash: String,
}

impl CredentialVerifier {
    /// Build a verifier over `store` with the cost factor from `config`.
    ///
    /// Fails only if the configured cost is outside bcrypt's accepted
    /// range, which `AuthConfig::validate` already rules out.
    pub fn new(store: Arc<dyn CredentialStore>, config: &AuthConfig) -> Result<Self, AuthError> {
        let equalizer_hash = hasher::hash_password("", config.hash_cost)?;
        Ok(Self {
            store,
            hash_cost: config.hash_cost,
            equalizer_hash,
        })
    }

    /// Verify a username/password pair against the store.
    ///
    /// Returns the authenticated `Principal` on success. Unknown user,
    /// wrong password, and rejected input come back as distinct variants
    /// for logging, but all of them satisfy
    /// `AuthError::is_credential_failure` and map to one generic message
    /// in `error::handlers`.
    pub fn verify(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        if !is_valid_input(username, MAX_USERNAME_LENGTH)
            || !is_valid_input(password, MAX_PASSWORD_LENGTH)
        {
            self.burn_comparison(password);
            return Err(AuthError::MalformedInput(
                "username or password failed input checks".into(),
            ));
        }

        match self.store.find_by_username(username)? {
            Some(record) => {
                if hasher::verify_password(password, &record.password_hash).map_err(|e| {
                    warn!("Stored hash for user {} is not usable: {}", username, e);
                    e
                })? {
                    info!("User {} authenticated", username);
                    Ok(Principal {
                        username: record.username,
                        role: record.role,
                    })
                } else {
                    warn!("Password mismatch for user {}", username);
                    Err(AuthError::BadCredentials(username.to_string()))
                }
            }
            None => {
                self.burn_comparison(password);
                warn!("Login attempt for unknown user {}", username);
                Err(AuthError::UserNotFound(username.to_string()))
            }
        }
    }

    /// Register a new user: hash the password with the configured cost and
    /// persist the record. The same cost factor feeds `verify`, so records
    /// created here always verify under the same parameters.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<UserRecord, AuthError> {
        if !is_valid_input(username, MAX_USERNAME_LENGTH) {
            return Err(AuthError::MalformedInput("invalid username".into()));
        }
        if !is_valid_input(password, MAX_PASSWORD_LENGTH) {
            return Err(AuthError::MalformedInput("invalid password".into()));
        }
        if role.trim().is_empty() {
            return Err(AuthError::MalformedInput("role cannot be blank".into()));
        }

        if self.store.find_by_username(username)?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let record = UserRecord {
            username: username.to_string(),
            password_hash: hasher::hash_password(password, self.hash_cost)?,
            role: role.to_string(),
        };
        self.store.save(record.clone())?;

        info!("Registered user {} with role {}", username, role);
        Ok(record)
    }

    /// One bcrypt comparison whose result is discarded. Keeps failure
    /// paths that skip the real comparison from being measurably faster.
    fn burn_comparison(&self, password: &str) {
        let _ = hasher::verify_password(password, &self.equalizer_hash);
    }
}

/// Basic input sanitation: non-blank, bounded length, no line breaks or
/// NUL bytes.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}
