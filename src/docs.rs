use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use na_meste_core::Role;
use na_meste_models::{
    Attendance, AttendanceRangeQuery, AttendancesResponse, CreateAttendanceRequest,
    CreateCollegeRequest, LoginRequest, LoginResponse, RegisterRequest,
};

/// `{"status":"OK"}`, with the payload fields next to `status` when there is one.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct StatusResponse {
    #[schema(example = "OK")]
    pub status: String,
}

/// `{"status":"Error","error":"..."}`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ErrorResponse {
    #[schema(example = "Error")]
    pub status: String,
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::register_user,
        crate::modules::colleges::controller::create_college,
        crate::modules::attendances::controller::create_attendance,
        crate::modules::attendances::controller::get_attendances,
    ),
    components(
        schemas(
            Role,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateCollegeRequest,
            CreateAttendanceRequest,
            AttendanceRangeQuery,
            Attendance,
            AttendancesResponse,
            StatusResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "User registration"),
        (name = "Colleges", description = "College management"),
        (name = "Attendances", description = "Recording and querying attendance")
    ),
    info(
        title = "na-meste API",
        version = "0.1.0",
        description = "Attendance tracking for colleges: students, teachers and scanners.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
