use axum::{Json, extract::State};
use tracing::instrument;

use na_meste_core::{ApiResponse, AppError};
use na_meste_models::{LoginRequest, LoginResponse};

use super::service::AuthService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request - empty, undecodable or invalid body", body = ErrorResponse),
        (status = 401, description = "Password is incorrect", body = ErrorResponse),
        (status = 404, description = "User with this email does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(ep = "auth.login"))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let jwt = AuthService::login_user(state.users.as_ref(), dto, &state.jwt_config)
        .await
        .inspect_err(AppError::log_internal)?;
    Ok(Json(ApiResponse::with_data(LoginResponse { jwt })))
}
