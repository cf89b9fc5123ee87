use std::fmt;
use std::str::FromStr;

use crate::{ConfigError, var_or};

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";

/// Deployment environment, selects the log format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Local,
    Prod,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "prod" => Ok(Environment::Prod),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Local => f.write_str("local"),
            Environment::Prod => f.write_str("prod"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub address: String,
    pub environment: Environment,
}

impl ServerConfig {
    /// Loads `SERVER_ADDRESS` and `APP_ENV`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            address: var_or("SERVER_ADDRESS", DEFAULT_ADDRESS.to_string())?,
            environment: var_or("APP_ENV", Environment::Local)?,
        })
    }
}
