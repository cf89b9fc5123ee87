//! Role guards for route groups.
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::post};
//! use crate::middleware::role::require_scanner;
//!
//! let routes = Router::new().route(
//!     "/attendances",
//!     post(create_attendance)
//!         .route_layer(middleware::from_fn_with_state(state.clone(), require_scanner)),
//! );
//! ```
//!
//! Roles are compared by equality. A teacher does not pass a scanner guard.

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use na_meste_core::{AppError, Role};

use crate::middleware::auth::{AuthUser, authenticate};
use crate::state::AppState;

/// Fails with 403 unless the caller holds exactly `required`.
pub fn check_role(auth_user: &AuthUser, required: Role) -> Result<(), AppError> {
    if auth_user.role() != required {
        debug!(role = %auth_user.role(), required = %required, "role check failed");
        return Err(AppError::forbidden(anyhow!(
            "forbidden: insufficient permissions"
        )));
    }
    Ok(())
}

/// Authenticates the request, checks the role and passes the verified
/// [`AuthUser`] on to the handler through the request extensions.
pub async fn require_role(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    required: Role,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    check_role(&auth_user, required)?;

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(State(state), req, next, Role::Teacher)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

pub async fn require_scanner(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(State(state), req, next, Role::Scanner)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(State(state), req, next, Role::Student)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}
