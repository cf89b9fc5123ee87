//! Success envelope shared by every endpoint.
//!
//! Errors are rendered by [`AppError`](crate::AppError) as `{"status":"Error","error":...}`;
//! successes are `{"status":"OK"}` with the payload's fields flattened next to `status`.

use serde::Serialize;

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// A bare `{"status":"OK"}`.
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            status: STATUS_OK,
            data: Some(data),
        }
    }
}
