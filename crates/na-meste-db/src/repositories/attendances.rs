use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use na_meste_models::{Attendance, AttendanceId, NewAttendance, UserId};

use super::AttendanceRepository;
use crate::error::RepositoryError;

pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn create(&self, attendance: NewAttendance) -> Result<Attendance, RepositoryError> {
        let created = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendances (student_id, college_id, date)
            VALUES ($1, $2, $3)
            RETURNING id, student_id, college_id, date
            "#,
        )
        .bind(attendance.student_id)
        .bind(attendance.college_id)
        .bind(attendance.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: AttendanceId) -> Result<Option<Attendance>, RepositoryError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "SELECT id, student_id, college_id, date FROM attendances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(attendance)
    }

    async fn find_by_student_between(
        &self,
        student_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, RepositoryError> {
        let attendances = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, student_id, college_id, date
            FROM attendances
            WHERE student_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date, id
            "#,
        )
        .bind(student_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(attendances)
    }

    async fn delete(&self, id: AttendanceId) -> Result<AttendanceId, RepositoryError> {
        sqlx::query_scalar::<_, AttendanceId>(
            "DELETE FROM attendances WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }
}
