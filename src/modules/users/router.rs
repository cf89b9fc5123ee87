use axum::{Router, routing::post};

use super::controller::register_user;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/users/", post(register_user))
}
