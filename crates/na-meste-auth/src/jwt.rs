//! Issuing and verifying access tokens.
//!
//! Tokens are HS256-signed JWTs. Verification pins the algorithm, checks the
//! issuer and rejects anything past `exp` with zero leeway.
//!
//! # Example
//!
//! ```ignore
//! use na_meste_auth::{create_access_token, verify_token};
//! use na_meste_config::JwtConfig;
//! use na_meste_core::Role;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(user_id, Role::Scanner, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use na_meste_config::JwtConfig;
use na_meste_core::Role;

use crate::claims::Claims;
use crate::error::TokenError;

/// Creates a signed access token for `user_id` carrying `role`.
///
/// # Errors
///
/// Returns [`TokenError::Issue`] if encoding fails.
pub fn create_access_token(
    user_id: i64,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now as usize,
        exp: exp.max(0) as usize,
        iss: jwt_config.issuer.clone(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Issue(e.to_string()))
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// - [`TokenError::InvalidSignature`] when the signature does not match the secret
/// - [`TokenError::Expired`] when `now >= exp`
/// - [`TokenError::InvalidIssuer`] when `iss` differs from the configured issuer
/// - [`TokenError::Malformed`] for anything that does not parse
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(TokenError::from)
}

fn validation(jwt_config: &JwtConfig) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[jwt_config.issuer.as_str()]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation
}
