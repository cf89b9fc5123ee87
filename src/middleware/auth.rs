use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::debug;

use na_meste_auth::{Claims, verify_token};
use na_meste_config::JwtConfig;
use na_meste_core::{AppError, Role};
use na_meste_models::UserId;

use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Verified claims of the caller.
///
/// Role guards store it in the request extensions; when used as an extractor on
/// an unguarded route it verifies the `Authorization` header itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0
            .user_id()
            .map(UserId)
            .map_err(|_| AppError::unauthorized(anyhow!("invalid or expired token")))
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized(anyhow!("no token provided")))?;

    let value = value
        .to_str()
        .map_err(|_| AppError::unauthorized(anyhow!("invalid Authorization format")))?;

    if !value.starts_with(BEARER_PREFIX) {
        return Err(AppError::unauthorized(anyhow!(
            "invalid Authorization format"
        )));
    }

    Ok(&value[BEARER_PREFIX.len()..])
}

/// Extracts and verifies the bearer token.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;

    let claims = verify_token(token, jwt_config).map_err(|e| {
        debug!(reason = %e, "token rejected");
        AppError::unauthorized(anyhow!("invalid or expired token"))
    })?;

    Ok(AuthUser(claims))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.public_message(), "no token provided");
    }

    #[test]
    fn test_wrong_scheme() {
        for value in ["Basic abc", "bearer abc", "Bearer", "Token abc"] {
            let err = bearer_token(&headers(value)).unwrap_err();
            assert_eq!(err.public_message(), "invalid Authorization format");
        }
    }

    #[test]
    fn test_token_is_sliced_after_prefix() {
        let map = headers("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&map).unwrap(), "abc.def.ghi");

        let map = headers("Bearer ");
        assert_eq!(bearer_token(&map).unwrap(), "");
    }

    #[test]
    fn test_non_utf8_header() {
        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff").unwrap(),
        );
        let err = bearer_token(&map).unwrap_err();
        assert_eq!(err.public_message(), "invalid Authorization format");
    }
}
