#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use na_meste::router::init_router;
use na_meste::state::AppState;
use na_meste_config::JwtConfig;
use na_meste_core::Role;
use na_meste_db::memory::InMemoryDatabase;
use na_meste_db::{CollegeRepository, UserRepository};
use na_meste_models::{CollegeId, User};

pub const TEST_PASSWORD: &str = "testpass123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
        issuer: "na-meste-api".to_string(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: Arc<InMemoryDatabase>,
    pub state: AppState,
}

pub fn test_state(db: Arc<InMemoryDatabase>) -> AppState {
    AppState::new(db.clone(), db.clone(), db, test_jwt_config())
}

pub fn setup_test_app() -> TestApp {
    let db = Arc::new(InMemoryDatabase::new());
    let state = test_state(db.clone());

    TestApp {
        router: init_router(state.clone()),
        db,
        state,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Sends `body` verbatim; `None` sends an empty body.
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Value,
        token: Option<&str>,
    ) -> TestResponse {
        self.send_raw(method, uri, Some(&body.to_string()), token)
            .await
    }

    pub async fn create_college(&self, name: &str) -> CollegeId {
        CollegeRepository::create(self.db.as_ref(), name)
            .await
            .unwrap()
            .id
    }

    /// Registers through the API and returns the stored user.
    pub async fn register(&self, email: &str, role: Role, college_id: CollegeId) -> User {
        let response = self
            .send(
                "POST",
                "/users/",
                json!({
                    "username": "Test User",
                    "email": email,
                    "password": TEST_PASSWORD,
                    "role": role.as_str(),
                    "college_id": college_id.into_inner(),
                }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        self.db.find_by_email(email).await.unwrap().unwrap()
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .send(
                "POST",
                "/login/",
                json!({ "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);

        response.body["jwt"].as_str().unwrap().to_string()
    }

    /// Registers a user with `role` in `college_id` and logs them in.
    pub async fn user_with_token(&self, role: Role, college_id: CollegeId) -> (User, String) {
        let email = generate_unique_email();
        let user = self.register(&email, role, college_id).await;
        let token = self.login(&email, TEST_PASSWORD).await;
        (user, token)
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
