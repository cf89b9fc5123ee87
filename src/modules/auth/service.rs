use anyhow::anyhow;
use tracing::{info, instrument};

use na_meste_auth::create_access_token;
use na_meste_config::JwtConfig;
use na_meste_core::{AppError, verify_password};
use na_meste_db::UserRepository;
use na_meste_models::LoginRequest;

const LOGIN_FAILED: &str = "Failed to log in, try later again";

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and issues an access token.
    ///
    /// Unknown email is 404, wrong password is 401.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login_user(
        users: &dyn UserRepository,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let user = users
            .find_by_email(&dto.email)
            .await
            .map_err(|e| AppError::internal_context(e, LOGIN_FAILED))?
            .ok_or_else(|| AppError::not_found(anyhow!("User with this email does not exist")))?;

        let is_valid = verify_password(&dto.password, &user.password_hash)
            .map_err(|e| AppError::internal_context(e.error, LOGIN_FAILED))?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow!("Password is incorrect")));
        }

        let token = create_access_token(user.id.into_inner(), user.role, jwt_config)
            .map_err(|e| AppError::internal_context(e, LOGIN_FAILED))?;

        info!(user_id = %user.id, role = %user.role, "user logged in");
        Ok(token)
    }
}
