use crate::{ConfigError, required_var, var_or};

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600; // 1 hour
pub const DEFAULT_ISSUER: &str = "na-meste-api";
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
    pub issuer: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    /// Loads `JWT_SECRET` (required), `JWT_ACCESS_EXPIRY` and `JWT_ISSUER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = required_var("JWT_SECRET")?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {} bytes long", MIN_SECRET_LEN),
            });
        }

        Ok(Self {
            secret,
            access_token_expiry: var_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?,
            issuer: var_or("JWT_ISSUER", DEFAULT_ISSUER.to_string())?,
        })
    }
}
