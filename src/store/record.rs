//! Credential record type

use serde::{Deserialize, Serialize};

/// One registered principal as persisted in the credential store.
///
/// `username` acts as the primary key and never changes once created.
/// `password_hash` is a bcrypt hash string, never a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    /// Authorization label, e.g. "USER" or "ADMIN"
    pub role: String,
}
