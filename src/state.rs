use std::fmt;
use std::sync::Arc;

use na_meste_config::JwtConfig;
use na_meste_db::{
    AttendanceRepository, CollegeRepository, PgAttendanceRepository, PgCollegeRepository, PgPool,
    PgUserRepository, UserRepository,
};

/// Shared by every handler. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub colleges: Arc<dyn CollegeRepository>,
    pub attendances: Arc<dyn AttendanceRepository>,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        colleges: Arc<dyn CollegeRepository>,
        attendances: Arc<dyn AttendanceRepository>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            users,
            colleges,
            attendances,
            jwt_config,
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgCollegeRepository::new(pool.clone())),
            Arc::new(PgAttendanceRepository::new(pool)),
            jwt_config,
        )
    }
}

// Keeps the signing secret out of logs and spans.
impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_issuer", &self.jwt_config.issuer)
            .finish_non_exhaustive()
    }
}
