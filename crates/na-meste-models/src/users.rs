//! User entity and registration DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use na_meste_core::Role;
use na_meste_core::validation::ONE_OF;

use crate::ids::{CollegeId, UserId};

/// A row of `users`.
///
/// `college_id` becomes `None` when the college is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub college_id: Option<CollegeId>,
}

/// A user ready to be inserted, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub college_id: CollegeId,
}

/// Body of `POST /users/`.
///
/// Missing fields decode to their zero value so that they are reported by
/// validation as `required` rather than as a decoding failure.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "ivan", max_length = 100)]
    pub username: String,
    #[validate(length(min = 1, max = 200), email)]
    #[schema(example = "ivan@college.ru", max_length = 200)]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub password: String,
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_role")
    )]
    #[schema(example = "student")]
    pub role: String,
    #[validate(range(min = 1, code = "required"))]
    pub college_id: i64,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>()
        .map(|_| ())
        .map_err(|_| ValidationError::new(ONE_OF))
}
