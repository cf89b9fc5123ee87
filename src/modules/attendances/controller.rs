use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use na_meste_core::{ApiResponse, AppError};
use na_meste_models::{AttendanceRangeQuery, AttendancesResponse, CreateAttendanceRequest};

use super::service::AttendanceService;
use crate::docs::{ErrorResponse, StatusResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Record an attendance (scanner only)
#[utoipa::path(
    post,
    path = "/attendances/",
    request_body = CreateAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = StatusResponse),
        (status = 400, description = "Bad request - validation error or unknown student/college", body = ErrorResponse),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not a scanner", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendances"
)]
#[instrument(skip_all, fields(ep = "attendances.create", scanner = %auth_user.0.sub))]
pub async fn create_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAttendanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    AttendanceService::create_attendance(state.attendances.as_ref(), dto)
        .await
        .inspect_err(AppError::log_internal)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok())))
}

/// List a student's attendances in a date range (teacher only)
///
/// The range is sent as a JSON body.
#[utoipa::path(
    get,
    path = "/attendances/",
    request_body = AttendanceRangeQuery,
    responses(
        (status = 200, description = "Attendances in the range, oldest first", body = AttendancesResponse),
        (status = 400, description = "Bad request - validation error or inverted range", body = ErrorResponse),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not a teacher", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendances"
)]
#[instrument(skip_all, fields(ep = "attendances.get", teacher = %auth_user.0.sub))]
pub async fn get_attendances(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(query): ValidatedJson<AttendanceRangeQuery>,
) -> Result<Json<ApiResponse<AttendancesResponse>>, AppError> {
    let attendances = AttendanceService::get_attendances(state.attendances.as_ref(), query)
        .await
        .inspect_err(AppError::log_internal)?;
    Ok(Json(ApiResponse::with_data(AttendancesResponse {
        attendances,
    })))
}
