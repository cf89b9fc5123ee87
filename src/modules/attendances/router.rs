use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{create_attendance, get_attendances};
use crate::middleware::role::{require_scanner, require_teacher};
use crate::state::AppState;

/// Scanners record attendances, teachers read them.
pub fn init_attendances_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/attendances/",
            post(create_attendance)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_scanner)),
        )
        .route(
            "/attendances/",
            get(get_attendances)
                .route_layer(middleware::from_fn_with_state(state, require_teacher)),
        )
}
