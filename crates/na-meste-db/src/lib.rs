//! # na-meste DB
//!
//! Connection pool, schema migrations and the repositories the services call.
//!
//! Each entity has a repository trait in [`repositories`] with a PostgreSQL
//! implementation. With the `test-utils` feature, [`memory::InMemoryDatabase`]
//! implements the same traits with the same constraint semantics, so the HTTP
//! layer can be tested without a database.
//!
//! # Example
//!
//! ```ignore
//! use na_meste_config::DatabaseConfig;
//! use na_meste_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod repositories;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;

use na_meste_config::DatabaseConfig;

pub use error::RepositoryError;
pub use repositories::{
    AttendanceRepository, CollegeRepository, PgAttendanceRepository, PgCollegeRepository,
    PgUserRepository, UserRepository,
};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects a PostgreSQL pool sized by `config.max_connections`.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the SQL files under `migrations/` that have not run yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
