use axum::{Router, routing::post};

use super::controller::create_college;
use crate::state::AppState;

pub fn init_colleges_router() -> Router<AppState> {
    Router::new().route("/colleges/", post(create_college))
}
