mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Router, middleware, routing::get};
use http_body_util::BodyExt;
use tower::ServiceExt;

use na_meste::middleware::auth::AuthUser;
use na_meste::middleware::role::{check_role, require_student};
use na_meste::na_meste_auth::{Claims, create_access_token};
use na_meste::na_meste_core::Role;
use na_meste::na_meste_core::roles::ALL_ROLES;

use common::{setup_test_app, test_jwt_config};

fn create_test_auth_user(role: Role) -> AuthUser {
    AuthUser(Claims {
        sub: "1".to_string(),
        role,
        iat: 1234567890,
        exp: 9999999999,
        iss: "na-meste-api".to_string(),
    })
}

#[test]
fn test_check_role_exact_match() {
    for role in ALL_ROLES {
        assert!(check_role(&create_test_auth_user(role), role).is_ok());
    }
}

#[test]
fn test_check_role_no_match() {
    for held in ALL_ROLES {
        for required in ALL_ROLES.into_iter().filter(|r| *r != held) {
            let err = check_role(&create_test_auth_user(held), required).unwrap_err();
            assert_eq!(err.status, StatusCode::FORBIDDEN);
            assert_eq!(err.public_message(), "forbidden: insufficient permissions");
        }
    }
}

#[test]
fn test_auth_user_accessors() {
    let auth_user = create_test_auth_user(Role::Scanner);

    assert_eq!(auth_user.role(), Role::Scanner);
    assert_eq!(auth_user.user_id().unwrap().into_inner(), 1);
}

async fn whoami(auth_user: AuthUser) -> String {
    auth_user.0.sub
}

fn probe_router() -> Router {
    let app = setup_test_app();
    Router::new()
        .route(
            "/probe",
            get(whoami).route_layer(middleware::from_fn_with_state(
                app.state.clone(),
                require_student,
            )),
        )
        .with_state(app.state)
}

async fn call_probe(authorization: Option<String>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri("/probe");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }

    let response = probe_router()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_guard_passes_matching_role() {
    let token = create_access_token(42, Role::Student, &test_jwt_config()).unwrap();

    let (status, body) = call_probe(Some(format!("Bearer {}", token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "42");
}

#[tokio::test]
async fn test_guard_rejects_other_roles() {
    for role in [Role::Teacher, Role::Scanner] {
        let token = create_access_token(42, role, &test_jwt_config()).unwrap();

        let (status, body) = call_probe(Some(format!("Bearer {}", token))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("forbidden: insufficient permissions"));
    }
}

#[tokio::test]
async fn test_guard_without_header() {
    let (status, body) = call_probe(None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("no token provided"));
}

#[tokio::test]
async fn test_guard_with_wrong_scheme() {
    let (status, body) = call_probe(Some("Token abc".to_string())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("invalid Authorization format"));
}

#[tokio::test]
async fn test_guard_with_garbage_token() {
    let (status, body) = call_probe(Some("Bearer not.a.jwt".to_string())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("invalid or expired token"));
}

#[tokio::test]
async fn test_guard_with_expired_token() {
    let mut jwt_config = test_jwt_config();
    jwt_config.access_token_expiry = -60;
    let token = create_access_token(42, Role::Student, &jwt_config).unwrap();

    let (status, body) = call_probe(Some(format!("Bearer {}", token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("invalid or expired token"));
}
