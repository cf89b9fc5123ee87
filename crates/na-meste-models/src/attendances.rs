//! Attendance records and the DTOs to create and query them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{AttendanceId, CollegeId, UserId};

/// One check-in of a student at a college.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Attendance {
    pub id: AttendanceId,
    pub student_id: UserId,
    pub college_id: CollegeId,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub student_id: UserId,
    pub college_id: CollegeId,
    pub date: DateTime<Utc>,
}

/// Body of `POST /attendances/`. `date` is RFC 3339.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateAttendanceRequest {
    #[validate(range(min = 1, code = "required"))]
    pub student_id: i64,
    #[validate(range(min = 1, code = "required"))]
    pub college_id: i64,
    #[validate(required)]
    #[schema(value_type = String, format = DateTime, example = "2025-03-01T08:30:00Z")]
    pub date: Option<DateTime<Utc>>,
}

/// Body of `GET /attendances/`. Both bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct AttendanceRangeQuery {
    #[validate(range(min = 1, code = "required"))]
    pub student_id: i64,
    #[validate(required)]
    #[schema(value_type = String, format = DateTime)]
    pub start_date: Option<DateTime<Utc>>,
    #[validate(required)]
    #[schema(value_type = String, format = DateTime)]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendancesResponse {
    pub attendances: Vec<Attendance>,
}
