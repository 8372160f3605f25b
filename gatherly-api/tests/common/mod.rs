/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (migrations included)
/// - Test user creation
/// - JWT token generation
/// - API client helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use gatherly_api::app::{build_router, AppState};
use gatherly_api::config::Config;
use gatherly_shared::auth::jwt::{create_token, Claims};
use gatherly_shared::db::migrations::run_migrations;
use gatherly_shared::mail::Mailer;
use gatherly_shared::models::event::{CreateEvent, Event};
use gatherly_shared::models::user::{CreateUser, User};
use sqlx::PgPool;
use tower::Service as _;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
    pub user: User,
    pub jwt_token: String,
}

impl TestContext {
    /// Creates a new test context with a stub mailer
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_mailer(Mailer::stub("test@gatherly.io")).await
    }

    /// Creates a new test context with the given mailer
    pub async fn with_mailer(mailer: Mailer) -> anyhow::Result<Self> {
        // Load test configuration
        let config = Config::from_env()?;

        // Connect to database and apply migrations
        let db = PgPool::connect(&config.database.url).await?;
        run_migrations(&db).await?;

        // Create test user
        let user = User::create(
            &db,
            CreateUser {
                username: format!("test-user-{}", Uuid::new_v4()),
                email: format!("test-{}@example.com", Uuid::new_v4()),
                password_hash: "test_hash".to_string(), // Not used by token auth
            },
        )
        .await?;

        // Generate JWT token
        let claims = Claims::new(user.id, user.username.clone());
        let jwt_token = create_token(&claims, &config.jwt.secret)?;

        // Build app
        let state = AppState::new(db.clone(), config.clone(), mailer);
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            user,
            jwt_token,
        })
    }

    /// Returns authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Cleans up test data
    ///
    /// Deleting the test user cascades to its registrations and events.
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        User::delete(&self.db, self.user.id).await?;
        Ok(())
    }

    /// Sends a request through the router and returns the response
    pub async fn request(&self, request: Request<Body>) -> axum::response::Response {
        self.app.clone().call(request).await.unwrap()
    }
}

/// Helper to create an event directly in the database
///
/// The context's test user is the organizer.
pub async fn create_test_event(
    ctx: &TestContext,
    title: &str,
    date: chrono::NaiveDate,
) -> anyhow::Result<Event> {
    let event = Event::create(
        &ctx.db,
        CreateEvent {
            title: title.to_string(),
            description: "Test event".to_string(),
            location: "Test venue".to_string(),
            date,
            organizer_id: ctx.user.id,
        },
    )
    .await?;

    Ok(event)
}

/// Helper to build a JSON request
pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(auth_header) = auth {
        builder = builder.header("authorization", auth_header);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Helper to build a bodyless request
pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth_header) = auth {
        builder = builder.header("authorization", auth_header);
    }

    builder.body(Body::empty()).unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Asserts a status, panicking with the response body on mismatch
pub async fn assert_status(response: axum::response::Response, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8_lossy(&body);

    assert_eq!(status, expected, "unexpected status, body: {}", body_str);

    if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    }
}
