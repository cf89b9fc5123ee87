//! # na-meste Models
//!
//! Database entities and request/response DTOs.
//!
//! - [`ids`]: typed `i64` keys
//! - [`users`]: users and registration
//! - [`colleges`]: colleges
//! - [`attendances`]: attendance records and range queries
//! - [`auth`]: login
//!
//! Request DTOs derive `Validate`; their constraint codes are the ones rendered by
//! `na_meste_core::validation`.

pub mod attendances;
pub mod auth;
pub mod colleges;
pub mod ids;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use attendances::{
    Attendance, AttendanceRangeQuery, AttendancesResponse, CreateAttendanceRequest, NewAttendance,
};
pub use auth::{LoginRequest, LoginResponse};
pub use colleges::{College, CreateCollegeRequest};
pub use ids::{AttendanceId, CollegeId, UserId};
pub use users::{NewUser, RegisterRequest, User};
