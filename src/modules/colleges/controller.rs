use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use na_meste_core::{ApiResponse, AppError};
use na_meste_models::CreateCollegeRequest;

use super::service::CollegeService;
use crate::docs::{ErrorResponse, StatusResponse};
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a college
#[utoipa::path(
    post,
    path = "/colleges/",
    request_body = CreateCollegeRequest,
    responses(
        (status = 201, description = "College created", body = StatusResponse),
        (status = 400, description = "Bad request - validation error or name taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Colleges"
)]
#[instrument(skip_all, fields(ep = "colleges.create"))]
pub async fn create_college(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCollegeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    CollegeService::create_college(state.colleges.as_ref(), dto)
        .await
        .inspect_err(AppError::log_internal)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok())))
}
