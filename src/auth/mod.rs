//! Authentication system
//!
//! Handles credential verification, password hashing, and registration.

pub mod hasher;
pub mod principal;
pub mod verifier;

pub use principal::Principal;
pub use verifier::CredentialVerifier;
