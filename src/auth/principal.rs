//! Authenticated principal type

/// Identity produced by a successful credential verification.
///
/// Ephemeral: lives only as long as the request or session that holds it.
/// The role is carried for callers to consult; the access policy itself
/// never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub role: String,
}
