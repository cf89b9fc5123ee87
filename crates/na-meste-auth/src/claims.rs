//! JWT claim structure carried by access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use na_meste_core::Role;

use crate::error::TokenError;

/// Identity assertion embedded in every access token.
///
/// Authorization decisions are made from these claims alone, the middleware
/// never looks the user up again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub role: Role,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    pub iss: String,
}

impl Claims {
    /// Numeric id of the subject.
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub.parse().map_err(|_| TokenError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Claims {
        Claims {
            sub: "42".to_string(),
            role: Role::Scanner,
            iat: 1234567800,
            exp: 1234567890,
            iss: "na-meste-api".to_string(),
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&sample()).unwrap();
        assert!(serialized.contains(r#""sub":"42""#));
        assert!(serialized.contains(r#""role":"scanner""#));
        assert!(serialized.contains(r#""iss":"na-meste-api""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"7","role":"teacher","iat":9999999900,"exp":9999999999,"iss":"x"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role, Role::Teacher);
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_claims_unknown_role_rejected() {
        let json = r#"{"sub":"7","role":"Teacher","iat":1,"exp":2,"iss":"x"}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_user_id() {
        assert_eq!(sample().user_id(), Ok(42));

        let mut claims = sample();
        claims.sub = "not-a-number".to_string();
        assert_eq!(claims.user_id(), Err(TokenError::Malformed));
    }
}
