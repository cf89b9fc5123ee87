//! Repository traits and their PostgreSQL implementations.
//!
//! Services depend on the traits only (`Arc<dyn UserRepository>` and so on).
//! Every method maps storage failures to [`RepositoryError`]:
//!
//! - unique violations become `Conflict`
//! - references to missing rows become `ForeignKey`
//! - `update`/`delete` of a missing id become `NotFound`

mod attendances;
mod colleges;
mod users;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use na_meste_models::{
    Attendance, AttendanceId, College, CollegeId, NewAttendance, NewUser, User, UserId,
};

use crate::error::RepositoryError;

pub use attendances::PgAttendanceRepository;
pub use colleges::PgCollegeRepository;
pub use users::PgUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Inserts a user.
    ///
    /// # Errors
    /// * `Conflict` - email is already registered
    /// * `ForeignKey` - the college does not exist
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Changes the username and/or email, leaving `None` fields untouched.
    async fn update(
        &self,
        id: UserId,
        username: Option<String>,
        email: Option<String>,
    ) -> Result<User, RepositoryError>;

    /// Deletes the user and its attendances, returning the deleted id.
    async fn delete(&self, id: UserId) -> Result<UserId, RepositoryError>;
}

#[async_trait]
pub trait CollegeRepository: Send + Sync + 'static {
    /// # Errors
    /// * `Conflict` - a college with this name exists
    async fn create(&self, name: &str) -> Result<College, RepositoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<College>, RepositoryError>;

    /// Deletes the college. Its users are detached, its attendances removed.
    async fn delete(&self, id: CollegeId) -> Result<CollegeId, RepositoryError>;
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync + 'static {
    /// # Errors
    /// * `ForeignKey` - the student or the college does not exist
    async fn create(&self, attendance: NewAttendance) -> Result<Attendance, RepositoryError>;

    async fn find_by_id(&self, id: AttendanceId) -> Result<Option<Attendance>, RepositoryError>;

    /// Attendances of `student_id` with `start <= date <= end`, oldest first.
    async fn find_by_student_between(
        &self,
        student_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, RepositoryError>;

    async fn delete(&self, id: AttendanceId) -> Result<AttendanceId, RepositoryError>;
}
