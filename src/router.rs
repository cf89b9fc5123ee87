use axum::{Router, middleware, routing::get};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::attendances::init_attendances_router;
use crate::modules::auth::init_auth_router;
use crate::modules::colleges::init_colleges_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

pub const GREETING: &str = "Все на месте!";

async fn greeting() -> &'static str {
    GREETING
}

/// Feature routes, mounted both at the root and under `/api`.
fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(init_auth_router())
        .merge(init_users_router())
        .merge(init_colleges_router())
        .merge(init_attendances_router(state.clone()))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes(&state))
        .nest("/api", api_routes(&state))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
