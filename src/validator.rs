use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use validator::Validate;

use na_meste_core::{AppError, collect_failures, render_failures};

/// JSON body that has been decoded and validated.
///
/// Rejections, all `400 Bad Request`:
/// - `Request body is empty` when the body is empty or only whitespace
/// - `Cannot decode the request body` when it is not the expected JSON
/// - the rendered validation failures when a constraint is violated
///
/// The `Content-Type` header is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!(error = %rejection, "cannot read the request body");
            AppError::bad_request(anyhow!("Cannot decode the request body"))
        })?;

        if body.trim_ascii().is_empty() {
            warn!("request body is empty");
            return Err(AppError::bad_request(anyhow!("Request body is empty")));
        }

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "cannot decode the request body");
            AppError::bad_request(anyhow!("Cannot decode the request body"))
        })?;
        debug!("request body decoded");

        value.validate().map_err(|errors| {
            let failures = collect_failures(&errors);
            warn!(?failures, "invalid request");
            AppError::bad_request(anyhow!(render_failures(&failures)))
        })?;

        Ok(ValidatedJson(value))
    }
}
