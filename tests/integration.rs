//! End-to-end flows: register, verify, authorize.

use std::sync::Arc;

use authgate::error::handlers::{client_message, INVALID_CREDENTIALS, SERVICE_UNAVAILABLE};
use authgate::{
    Access, AccessPolicy, AuthConfig, AuthError, CredentialStore, CredentialVerifier,
    MemoryCredentialStore, StoreError, UserRecord,
};

// Minimum bcrypt cost keeps the suite fast
fn test_config() -> AuthConfig {
    AuthConfig {
        public_paths: vec!["/login".to_string(), "/register".to_string()],
        hash_cost: 4,
    }
}

fn setup() -> (CredentialVerifier, AccessPolicy) {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = test_config();
    config.validate().unwrap();

    let store = Arc::new(MemoryCredentialStore::new());
    let verifier = CredentialVerifier::new(store, &config).unwrap();
    let policy = AccessPolicy::new(&config);
    (verifier, policy)
}

/// A store whose backend is unreachable, for failure propagation tests.
struct UnreachableStore;

impl CredentialStore for UnreachableStore {
    fn find_by_username(&self, _username: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn save(&self, _record: UserRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[test]
fn register_then_login_then_reach_a_protected_path() {
    let (verifier, policy) = setup();

    verifier.register("alice", "secret123", "USER").unwrap();

    // Anonymous visitor can reach the login page but nothing else
    assert_eq!(policy.authorize("/login", None), Access::Allow);
    let denied = policy.authorize("/dashboard", None);
    assert_eq!(
        denied,
        Access::Deny {
            redirect_to: "/login".to_string()
        }
    );

    // After login the same path opens up
    let principal = verifier.verify("alice", "secret123").unwrap();
    assert_eq!(principal.username, "alice");
    assert_eq!(principal.role, "USER");
    assert_eq!(policy.authorize("/dashboard", Some(&principal)), Access::Allow);
}

#[test]
fn wrong_password_and_unknown_user_are_indistinguishable() {
    let (verifier, _) = setup();
    verifier.register("alice", "secret123", "USER").unwrap();

    let wrong_password = verifier.verify("alice", "wrong").unwrap_err();
    let unknown_user = verifier.verify("bob", "anything").unwrap_err();

    assert!(wrong_password.is_credential_failure());
    assert!(unknown_user.is_credential_failure());
    assert_eq!(
        client_message(&wrong_password),
        client_message(&unknown_user)
    );
    assert_eq!(client_message(&wrong_password), INVALID_CREDENTIALS);
}

#[test]
fn store_outage_is_not_reported_as_bad_credentials() {
    let _ = env_logger::builder().is_test(true).try_init();

    let verifier = CredentialVerifier::new(Arc::new(UnreachableStore), &test_config()).unwrap();

    let err = verifier.verify("alice", "secret123").unwrap_err();
    assert!(matches!(err, AuthError::StoreUnavailable(_)));
    assert!(!err.is_credential_failure());
    assert_eq!(client_message(&err), SERVICE_UNAVAILABLE);

    let err = verifier.register("alice", "secret123", "USER").unwrap_err();
    assert!(matches!(err, AuthError::StoreUnavailable(_)));
}

#[test]
fn verification_is_repeatable() {
    let (verifier, _) = setup();
    verifier.register("alice", "secret123", "USER").unwrap();

    let first = verifier.verify("alice", "secret123").unwrap();
    let second = verifier.verify("alice", "secret123").unwrap();
    assert_eq!(first, second);

    // No lockout: failures do not change later outcomes
    for _ in 0..3 {
        assert!(verifier.verify("alice", "wrong").is_err());
    }
    assert!(verifier.verify("alice", "secret123").is_ok());
}

#[test]
fn seeded_store_records_verify_like_registered_ones() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = test_config();

    // Simulate records created by an earlier run of the registration path
    let bootstrap = CredentialVerifier::new(Arc::new(MemoryCredentialStore::new()), &config)
        .unwrap();
    let admin = bootstrap.register("root", "s3cr3t-pw", "ADMIN").unwrap();

    let store = Arc::new(MemoryCredentialStore::with_records([admin]));
    let verifier = CredentialVerifier::new(store, &config).unwrap();

    let principal = verifier.verify("root", "s3cr3t-pw").unwrap();
    assert_eq!(principal.role, "ADMIN");
}

#[test]
fn custom_allow_list_is_honored() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = AuthConfig {
        public_paths: vec!["/signin".to_string()],
        hash_cost: 4,
    };
    config.validate().unwrap();

    let policy = AccessPolicy::new(&config);
    assert_eq!(policy.authorize("/signin", None), Access::Allow);
    // The default pages are no longer special
    assert!(!policy.authorize("/login", None).is_allowed());
    assert!(!policy.authorize("/register", None).is_allowed());
}
