//! Login DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /login/`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, code = "required"), email)]
    #[schema(example = "ivan@college.ru")]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed access token, sent back as `Authorization: Bearer <jwt>`.
    pub jwt: String,
}
