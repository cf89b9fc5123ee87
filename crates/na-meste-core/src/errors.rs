//! Application error type.
//!
//! [`AppError`] pairs an HTTP status with an [`anyhow::Error`]. Client errors render
//! their message as-is. For server errors only the outermost context (the endpoint's
//! public message) reaches the client:
//!
//! ```ignore
//! repo.create(new_attendance)
//!     .await
//!     .map_err(|e| AppError::internal_context(e, "Failed to create the attendance"))?;
//! ```
//!
//! Handlers call [`AppError::log_internal`] while still inside their `#[instrument]`
//! span, so the full chain is logged next to the endpoint name:
//!
//! ```ignore
//! AttendanceService::create_attendance(repo, dto)
//!     .await
//!     .inspect_err(AppError::log_internal)?;
//! ```

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// Server error that shows `message` to the client and logs `err` underneath it.
    pub fn internal_context<E>(err: E, message: &'static str) -> Self
    where
        E: Into<Error>,
    {
        Self::internal(err.into().context(message))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    /// Logs a server error with its full chain in the current span. Client errors
    /// are left to the request log.
    pub fn log_internal(&self) {
        if self.status.is_server_error() {
            error!(
                status = self.status.as_u16(),
                error = format!("{:#}", self.error),
                "Request failed with an internal error"
            );
        }
    }

    /// Message that is safe to show to the client.
    pub fn public_message(&self) -> String {
        if !self.status.is_server_error() {
            return self.error.to_string();
        }

        // Only a context layer added by the caller is considered public.
        if self.error.chain().count() > 1 {
            self.error.to_string()
        } else {
            GENERIC_INTERNAL_MESSAGE.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "Error",
            "error": self.public_message(),
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
