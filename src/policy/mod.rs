//! Access policy
//!
//! Decides whether a requested path is reachable, given an optional
//! authenticated principal.

pub mod access;

pub use access::{Access, AccessPolicy, LOGIN_PATH};
