//! Configuration management for the authentication core
//!
//! One small configuration surface: the set of paths reachable without a
//! principal, and the bcrypt work factor. The work factor feeds both record
//! creation and verification, so the two always agree.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// bcrypt accepts cost factors in this range.
const MIN_HASH_COST: u32 = 4;
const MAX_HASH_COST: u32 = 31;

/// Authentication configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Paths reachable without an authenticated principal
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,

    /// bcrypt cost factor used when hashing and when equalizing failure cost
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

fn default_public_paths() -> Vec<String> {
    vec!["/login".to_string(), "/register".to_string()]
}

fn default_hash_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            public_paths: default_public_paths(),
            hash_cost: default_hash_cost(),
        }
    }
}

impl AuthConfig {
    /// Load configuration from an optional `authgate.toml` with
    /// `AUTHGATE_*` environment overrides. Missing file and missing keys
    /// fall back to the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("authgate").required(false))
            .add_source(Environment::with_prefix("AUTHGATE"))
            .build()?;

        let config: AuthConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(ConfigError::Message(format!(
                "hash_cost must be between {} and {}",
                MIN_HASH_COST, MAX_HASH_COST
            )));
        }

        if self.public_paths.is_empty() {
            return Err(ConfigError::Message(
                "public_paths cannot be empty".into(),
            ));
        }

        for path in &self.public_paths {
            if !path.starts_with('/') {
                return Err(ConfigError::Message(format!(
                    "public path must be absolute: {}",
                    path
                )));
            }
        }

        Ok(())
    }
}
