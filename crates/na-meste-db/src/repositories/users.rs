use async_trait::async_trait;
use sqlx::PgPool;

use na_meste_models::{NewUser, User, UserId};

use super::UserRepository;
use crate::error::RepositoryError;

const USER_COLUMNS: &str = "id, username, email, password_hash, role, college_id";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role, college_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            USER_COLUMNS
        );

        let created = sqlx::query_as::<_, User>(&query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.college_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        username: Option<String>,
        email: Option<String>,
    ) -> Result<User, RepositoryError> {
        let query = format!(
            "UPDATE users \
             SET username = COALESCE($2, username), email = COALESCE($3, email) \
             WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: UserId) -> Result<UserId, RepositoryError> {
        sqlx::query_scalar::<_, UserId>("DELETE FROM users WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{CollegeRepository, PgCollegeRepository};
    use na_meste_core::Role;
    use na_meste_models::CollegeId;

    fn new_user(email: &str, college_id: CollegeId) -> NewUser {
        NewUser {
            username: "ivan".to_string(),
            email: email.to_string(),
            password_hash: "$2b$12$hash".to_string(),
            role: Role::Scanner,
            college_id,
        }
    }

    async fn college(pool: &PgPool) -> CollegeId {
        PgCollegeRepository::new(pool.clone())
            .create("Polytech")
            .await
            .unwrap()
            .id
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_and_find_by_email(pool: PgPool) {
        let college_id = college(&pool).await;
        let repo = PgUserRepository::new(pool);

        let created = repo
            .create(new_user("ivan@college.ru", college_id))
            .await
            .unwrap();

        assert_eq!(created.role, Role::Scanner);
        assert_eq!(created.college_id, Some(college_id));
        assert_eq!(
            repo.find_by_email("ivan@college.ru").await.unwrap(),
            Some(created)
        );
        assert_eq!(repo.find_by_email("nobody@college.ru").await.unwrap(), None);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_duplicate_email_is_conflict(pool: PgPool) {
        let college_id = college(&pool).await;
        let repo = PgUserRepository::new(pool);
        repo.create(new_user("ivan@college.ru", college_id))
            .await
            .unwrap();

        let err = repo
            .create(new_user("ivan@college.ru", college_id))
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::Conflict("users_email_key".to_string()));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_unknown_college_is_foreign_key(pool: PgPool) {
        let repo = PgUserRepository::new(pool);

        let err = repo
            .create(new_user("ivan@college.ru", CollegeId(999)))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RepositoryError::ForeignKey("users_college_id_fkey".to_string())
        );
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_update_keeps_missing_fields(pool: PgPool) {
        let college_id = college(&pool).await;
        let repo = PgUserRepository::new(pool);
        let created = repo
            .create(new_user("ivan@college.ru", college_id))
            .await
            .unwrap();

        let updated = repo
            .update(created.id, Some("petr".to_string()), None)
            .await
            .unwrap();

        assert_eq!(updated.username, "petr");
        assert_eq!(updated.email, "ivan@college.ru");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_update_and_delete_missing_user(pool: PgPool) {
        let repo = PgUserRepository::new(pool);

        assert_eq!(
            repo.update(UserId(999), Some("petr".to_string()), None)
                .await
                .unwrap_err(),
            RepositoryError::NotFound
        );
        assert_eq!(
            repo.delete(UserId(999)).await.unwrap_err(),
            RepositoryError::NotFound
        );
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_delete_returns_id(pool: PgPool) {
        let college_id = college(&pool).await;
        let repo = PgUserRepository::new(pool);
        let created = repo
            .create(new_user("ivan@college.ru", college_id))
            .await
            .unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), created.id);
        assert_eq!(repo.find_by_email("ivan@college.ru").await.unwrap(), None);
    }
}
