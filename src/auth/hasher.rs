//! Password hashing
//!
//! Thin wrappers over bcrypt. One-way and deliberately slow: a leaked
//! store does not expose plaintext passwords, and the tunable cost factor
//! keeps offline brute force expensive.

use crate::error::AuthError;

/// Hash a plaintext password with the given bcrypt cost factor.
///
/// The cost must match the one used at verification time, which the
/// verifier guarantees by taking both from the same `AuthConfig`.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, AuthError> {
    let hash = bcrypt::hash(plaintext, cost)?;
    Ok(hash)
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is not
/// a parseable bcrypt string.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let matches = bcrypt::verify(plaintext, stored_hash)?;
    Ok(matches)
}
