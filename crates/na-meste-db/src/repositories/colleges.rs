use async_trait::async_trait;
use sqlx::PgPool;

use na_meste_models::{College, CollegeId};

use super::CollegeRepository;
use crate::error::RepositoryError;

pub struct PgCollegeRepository {
    pool: PgPool,
}

impl PgCollegeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollegeRepository for PgCollegeRepository {
    async fn create(&self, name: &str) -> Result<College, RepositoryError> {
        let college = sqlx::query_as::<_, College>(
            "INSERT INTO colleges (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(college)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<College>, RepositoryError> {
        let college =
            sqlx::query_as::<_, College>("SELECT id, name FROM colleges WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(college)
    }

    async fn delete(&self, id: CollegeId) -> Result<CollegeId, RepositoryError> {
        sqlx::query_scalar::<_, CollegeId>("DELETE FROM colleges WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}
