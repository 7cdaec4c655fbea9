//! Path authorization
//!
//! A binary split: allow-listed paths are open to everyone, every other
//! path requires an authenticated principal. Roles are carried on the
//! principal but never consulted here.

use std::collections::HashSet;

use crate::auth::Principal;
use crate::config::AuthConfig;

/// Where denied requests are sent to authenticate.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of an authorization check.
///
/// A deny always names the login entry point, so callers redirect or
/// prompt rather than silently passing the request through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny { redirect_to: String },
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }

    fn deny() -> Self {
        Access::Deny {
            redirect_to: LOGIN_PATH.to_string(),
        }
    }
}

/// Stateless path authorization over a fixed allow-list.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    public_paths: HashSet<String>,
}

impl AccessPolicy {
    /// Capture the allow-list from configuration. Paths are normalized the
    /// same way requests are, so `/login/` in config still matches.
    pub fn new(config: &AuthConfig) -> Self {
        let public_paths = config
            .public_paths
            .iter()
            .map(|path| normalize(path).to_string())
            .collect();
        Self { public_paths }
    }

    /// Decide access for `path`.
    ///
    /// Allow-listed paths are open unconditionally. Everything else is
    /// allowed only when a principal is present.
    pub fn authorize(&self, path: &str, principal: Option<&Principal>) -> Access {
        if self.public_paths.contains(normalize(path)) {
            return Access::Allow;
        }

        match principal {
            Some(_) => Access::Allow,
            None => Access::deny(),
        }
    }
}

/// Narrow normalization before matching: drop the query string and
/// fragment, ignore one trailing slash. Deliberately no prefix matching,
/// so sub-routes of a public page are not implicitly public.
fn normalize(path: &str) -> &str {
    let path = path
        .split_once(['?', '#'])
        .map_or(path, |(before, _)| before);
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
