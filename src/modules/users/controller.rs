use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use na_meste_core::{ApiResponse, AppError};
use na_meste_models::RegisterRequest;

use super::service::UserService;
use crate::docs::{ErrorResponse, StatusResponse};
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user under an existing college
#[utoipa::path(
    post,
    path = "/users/",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = StatusResponse),
        (status = 400, description = "Bad request - validation error, email taken or unknown college", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(ep = "users.register"))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    UserService::register_user(state.users.as_ref(), dto)
        .await
        .inspect_err(AppError::log_internal)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok())))
}
