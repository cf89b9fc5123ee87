//! College entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::CollegeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct College {
    pub id: CollegeId,
    pub name: String,
}

/// Body of `POST /colleges/`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateCollegeRequest {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Moscow Polytechnic College", max_length = 200)]
    pub name: String,
}
