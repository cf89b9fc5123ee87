use anyhow::anyhow;
use tracing::{info, instrument};

use na_meste_core::{AppError, Role, hash_password};
use na_meste_db::{RepositoryError, UserRepository};
use na_meste_models::{CollegeId, NewUser, RegisterRequest, User};

const REGISTER_FAILED: &str = "Cannot add user to db";

pub struct UserService;

impl UserService {
    #[instrument(skip_all, fields(email = %dto.email, role = %dto.role))]
    pub async fn register_user(
        users: &dyn UserRepository,
        dto: RegisterRequest,
    ) -> Result<User, AppError> {
        let role: Role = dto.role.parse().map_err(AppError::bad_request)?;

        let password_hash = hash_password(&dto.password)
            .map_err(|e| AppError::internal_context(e.error, REGISTER_FAILED))?;

        let new_user = NewUser {
            username: dto.username,
            email: dto.email,
            password_hash,
            role,
            college_id: CollegeId(dto.college_id),
        };

        let user = users.create(new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                AppError::bad_request(anyhow!("User with this email already exists"))
            }
            RepositoryError::ForeignKey(_) => {
                AppError::bad_request(anyhow!("College with this ID does not exist"))
            }
            e => AppError::internal_context(e, REGISTER_FAILED),
        })?;

        info!(user_id = %user.id, "user has been successfully added");
        Ok(user)
    }
}
