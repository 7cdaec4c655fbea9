//! Error handlers
//!
//! Maps internal errors to the fixed messages a caller is allowed to see.

use crate::error::types::AuthError;
use log::error;

/// Generic message for every credential failure. Unknown user and wrong
/// password must produce the same bytes so the response cannot be used to
/// probe which usernames exist.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Message for registration attempts against an existing username.
pub const USERNAME_UNAVAILABLE: &str = "Username is not available";

/// Message for infrastructure failures (store unreachable, hashing
/// backend rejected the stored hash).
pub const SERVICE_UNAVAILABLE: &str = "Service temporarily unavailable";

/// Log an authentication error with its precise variant.
pub fn handle_error(err: &AuthError) {
    error!("Authentication error: {}", err);
}

/// Convert an error to the message shown to the caller.
pub fn client_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::UserNotFound(_)
        | AuthError::BadCredentials(_)
        | AuthError::MalformedInput(_) => INVALID_CREDENTIALS,
        AuthError::UsernameTaken(_) => USERNAME_UNAVAILABLE,
        AuthError::Hash(_) | AuthError::StoreUnavailable(_) => SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn credential_failures_share_one_message() {
        let not_found = AuthError::UserNotFound("ghost".to_string());
        let bad_pass = AuthError::BadCredentials("alice".to_string());
        let malformed = AuthError::MalformedInput("blank username".to_string());

        assert_eq!(client_message(&not_found), client_message(&bad_pass));
        assert_eq!(client_message(&not_found), client_message(&malformed));
        assert_eq!(client_message(&not_found), INVALID_CREDENTIALS);

        handle_error(&not_found);
    }

    #[test]
    fn store_failure_is_not_a_credential_failure() {
        let err = AuthError::StoreUnavailable(StoreError::Unavailable("down".to_string()));
        assert!(!err.is_credential_failure());
        assert_eq!(client_message(&err), SERVICE_UNAVAILABLE);
        assert_ne!(client_message(&err), INVALID_CREDENTIALS);
    }
}
