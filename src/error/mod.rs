//! Error handling
//!
//! Defines error types and handling for the authentication core.

pub mod handlers;
pub mod types;

pub use types::*;
