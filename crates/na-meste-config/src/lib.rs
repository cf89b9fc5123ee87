//! # na-meste Config
//!
//! Configuration types for the na-meste attendance API.
//!
//! Every structure is loaded from environment variables (the binaries call
//! `dotenvy::dotenv()` first, so a `.env` file works too):
//!
//! - [`jwt`]: token signing secret, lifetime and issuer
//! - [`server`]: listen address and runtime environment
//! - [`database`]: PostgreSQL connection settings
//!
//! # Example
//!
//! ```ignore
//! use na_meste_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::{Environment, ServerConfig};

use std::env;
use std::str::FromStr;

/// Reads an optional variable, falling back to `default` when unset.
pub(crate) fn var_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("cannot parse '{}'", value),
        }),
        Err(_) => Ok(default),
    }
}

pub(crate) fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
